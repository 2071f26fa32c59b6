use crate::strategy::{Context, Strategy};
use derive_new::new;
use nameof::name_of_type;

/// Never decides anything. Lets tests drive the stack by hand.
#[derive(new)]
pub struct NullStrategy;

impl Strategy for NullStrategy {
    fn name(&self) -> &str {
        name_of_type!(NullStrategy)
    }

    fn run(&mut self, _ctx: &mut Context<'_>) {}
}
