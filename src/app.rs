//! Kakondo Site App
//!
//! Router, site shell and the app-wide context.

use kakondo_core::SiteConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{SiteFooter, SiteHeader};
use crate::context::AppContext;
use crate::pages::{
    ContactPage, DashboardPage, FocusAreaPage, GetInvolvedPage, HomePage, NewsPage, NotFoundPage, ProjectsPage,
    TeamPage,
};
use crate::store::DashboardState;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    log::info!("Starting {}", config.organization);

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(Store::new(DashboardState::default()));

    view! {
        <Router>
            <div class="site">
                <SiteHeader/>
                <main class="site-main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/focus-area") view=FocusAreaPage/>
                        <Route path=path!("/projects") view=ProjectsPage/>
                        <Route path=path!("/team") view=TeamPage/>
                        <Route path=path!("/news") view=NewsPage/>
                        <Route path=path!("/contact") view=ContactPage/>
                        <Route path=path!("/dashboard") view=DashboardPage/>
                        <Route path=path!("/get-involved") view=GetInvolvedPage/>
                    </Routes>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}
