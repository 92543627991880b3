mod ask;
mod components;
mod formats;
mod review;
mod state;
mod workflow;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
#[cfg(test)]
mod workflow_smoke;

pub use formats::FormatsView;
pub use review::ReviewView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use workflow::{ReviewSlots, launch_workflow};
