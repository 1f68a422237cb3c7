mod gate;
pub use self::gate::{select_tree, NavigationTree, Screen};

mod navigator;
pub use self::navigator::Navigator;
