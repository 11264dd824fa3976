pub mod add;
pub mod blocks;
pub mod init;
pub mod lint;
pub mod render;

pub use add::{add, AddArgs};
pub use blocks::{blocks, BlocksArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};
pub use render::{render, RenderArgs};
