use crate::strategy::Context;

/// Picks what to do next. Runs exactly once per tick, before whatever routine
/// is on top of the stack.
pub trait Strategy: Send {
    /// A very short string identifying the strategy; usually just the name of
    /// the type.
    fn name(&self) -> &str;

    fn run(&mut self, ctx: &mut Context<'_>);
}
