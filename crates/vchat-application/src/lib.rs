pub mod router;
pub mod session;
pub mod share_view;

pub use router::{Route, RouteDef, Router};
pub use session::{HydrationOutcome, SessionHydrator, ShareViewSnapshot, ShareViewState};
pub use share_view::{ShareView, check_config_status};
