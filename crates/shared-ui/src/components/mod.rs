// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod progress;
pub mod search_bar;
pub mod separator;
pub mod stat_card;
pub mod switch;
pub mod tabs;

// Overlays & providers
pub mod sheet;
pub mod toast;

// Layout; depends on button styling
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use progress::*;
pub use search_bar::*;
pub use separator::*;
pub use sheet::*;
pub use sidebar::*;
pub use stat_card::*;
pub use switch::*;
pub use tabs::*;
pub use toast::*;
