mod chain;
mod expression;
mod literal;
mod stage;

pub use chain::Chain;
pub use expression::{Base, Expression};
pub use literal::Literal;
pub use stage::{Arguments, Stage};
