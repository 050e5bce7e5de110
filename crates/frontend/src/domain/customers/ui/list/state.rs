use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(Clone, Debug, Default)]
pub struct CustomersListState {
    pub items: Vec<contracts::domain::customer::Customer>,
    pub total_pages: u64,
    pub total_count: u64,
}

pub fn create_state() -> RwSignal<CustomersListState> {
    RwSignal::new(CustomersListState::default())
}
