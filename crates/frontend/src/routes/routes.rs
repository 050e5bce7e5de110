use crate::dashboards::analytics::ui::AnalyticsDashboard;
use crate::dashboards::home::ui::HomeDashboard;
use crate::domain::customers::ui::form::CustomerFormPage;
use crate::domain::customers::ui::list::CustomersListPage;
use crate::domain::deals::ui::board::DealBoardPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path="/" /> }>
            <Route path=path!("/") view=HomeDashboard />
            <Route path=path!("/customers") view=CustomersListPage />
            <Route path=path!("/customers/new") view=CustomerFormPage />
            <Route path=path!("/customers/:id/edit") view=CustomerFormPage />
            <Route path=path!("/deals") view=DealBoardPage />
            <Route path=path!("/analytics") view=AnalyticsDashboard />
        </Routes>
    }
}
