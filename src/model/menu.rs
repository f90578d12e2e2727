//! The fixed menu: one closed enum per selection group, and the price table keyed by them.
use serde::{Deserialize, Serialize};

/// Primary choice group. Exactly one (or none) may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MainCourse {
    BigMac,
    McChicken,
    FiletOFish,
    CornSoup,
    ApplePie,
}

impl MainCourse {
    pub const ALL: [MainCourse; 5] = [
        MainCourse::BigMac,
        MainCourse::McChicken,
        MainCourse::FiletOFish,
        MainCourse::CornSoup,
        MainCourse::ApplePie,
    ];

    /// Display label shown on both screens.
    pub fn label(self) -> &'static str {
        match self {
            MainCourse::BigMac => "大麥克",
            MainCourse::McChicken => "麥香雞",
            MainCourse::FiletOFish => "麥香魚",
            MainCourse::CornSoup => "玉米濃湯",
            MainCourse::ApplePie => "蘋果派",
        }
    }
}

/// Secondary choice group (drink and cup size). Exactly one (or none) may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Drink {
    SmallCola,
    MediumCola,
    MediumTea,
    LargeCola,
    LargeTea,
}

impl Drink {
    pub const ALL: [Drink; 5] = [
        Drink::SmallCola,
        Drink::MediumCola,
        Drink::MediumTea,
        Drink::LargeCola,
        Drink::LargeTea,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Drink::SmallCola => "小杯可樂",
            Drink::MediumCola => "中杯可樂",
            Drink::MediumTea => "中杯紅茶",
            Drink::LargeCola => "大杯可樂",
            Drink::LargeTea => "大杯紅茶",
        }
    }
}

/// Independently toggleable extras.
///
/// Declaration order is the display order: `Ord` follows it, so a `BTreeSet<AddOn>`
/// always iterates Fries, Nuggets, IceCream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AddOn {
    Fries,
    Nuggets,
    IceCream,
}

impl AddOn {
    pub const ALL: [AddOn; 3] = [AddOn::Fries, AddOn::Nuggets, AddOn::IceCream];

    pub fn label(self) -> &'static str {
        match self {
            AddOn::Fries => "薯條",
            AddOn::Nuggets => "雞塊",
            AddOn::IceCream => "冰淇淋",
        }
    }
}

/// Price lookup table, one entry per menu item.
///
/// Injected into the session actor as its context. [`PriceList::default`] is the
/// standard menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList {
    main_course: [u32; 5],
    drink: [u32; 5],
    add_on: [u32; 3],
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            main_course: [130, 130, 130, 20, 20],
            drink: [0, 0, 0, 20, 20],
            add_on: [50, 50, 50],
        }
    }
}

impl PriceList {
    pub fn main_course(&self, choice: MainCourse) -> u32 {
        self.main_course[choice as usize]
    }

    pub fn drink(&self, choice: Drink) -> u32 {
        self.drink[choice as usize]
    }

    pub fn add_on(&self, item: AddOn) -> u32 {
        self.add_on[item as usize]
    }

    /// Returns a copy with one main course repriced.
    pub fn with_main_course(mut self, choice: MainCourse, price: u32) -> Self {
        self.main_course[choice as usize] = price;
        self
    }

    pub fn with_drink(mut self, choice: Drink, price: u32) -> Self {
        self.drink[choice as usize] = price;
        self
    }

    pub fn with_add_on(mut self, item: AddOn, price: u32) -> Self {
        self.add_on[item as usize] = price;
        self
    }
}
