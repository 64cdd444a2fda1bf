mod list;
mod simulate;

pub use list::List;
pub use simulate::Simulate;
