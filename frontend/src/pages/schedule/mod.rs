use crate::components::layout::Layout;
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{SchedulePanel, ScheduleView};

#[component]
pub fn SchedulePage() -> impl IntoView {
    view! {
        <Layout>
            <SchedulePanel />
        </Layout>
    }
}
