//! Demo: three visits to the order form from one summary screen.
//!
//! 1. A full order, confirmed.
//! 2. An order declined at the prompt, changed, then confirmed.
//! 3. A visit that leaves without confirming.

use order_entry::lifecycle::{setup_tracing, OrderEntrySystem};
use order_entry::model::{AddOn, Drink, MainCourse};
use order_entry::summary_view::{Answer, FormStep, ScriptedInput};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    info!("Starting order entry demo");

    let system = OrderEntrySystem::new();
    let mut view = system.summary_view();

    let visits = [
        (
            "full_order",
            ScriptedInput::new([
                FormStep::SetName("Alice".into()),
                FormStep::MainCourse(MainCourse::BigMac),
                FormStep::Drink(Drink::LargeCola),
                FormStep::ToggleAddOn(AddOn::IceCream),
                FormStep::ToggleAddOn(AddOn::Fries),
                FormStep::Checkout(Answer::Confirm),
            ]),
        ),
        (
            "second_thoughts",
            ScriptedInput::new([
                FormStep::SetName("Bob".into()),
                FormStep::MainCourse(MainCourse::McChicken),
                FormStep::Checkout(Answer::Decline),
                FormStep::MainCourse(MainCourse::ApplePie),
                FormStep::ToggleAddOn(AddOn::Nuggets),
                FormStep::Checkout(Answer::Confirm),
            ]),
        ),
        (
            "walk_away",
            ScriptedInput::new([
                FormStep::SetName("Carol".into()),
                FormStep::MainCourse(MainCourse::FiletOFish),
                FormStep::Leave,
            ]),
        ),
    ];

    for (name, mut input) in visits {
        let span = tracing::info_span!("visit", name);
        async {
            view.invoke(&mut input).await.map_err(|e| e.to_string())?;
            info!(display = %view.display().to_string().replace('\n', " | "), "Summary screen");
            Ok::<_, String>(())
        }
        .instrument(span)
        .await?;
    }

    drop(view);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
