mod search_state;
mod state_data;
mod state_editor;
mod street_search_request;

pub use search_state::State;
pub use state_data::StateData;
pub use state_editor::StateEditor;
pub use street_search_request::StreetSearchRequest;
