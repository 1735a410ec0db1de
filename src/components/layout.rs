//! Site shell: header with desktop and mobile navigation, and footer

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::context::use_app_context;
use crate::routes::Page;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: leptos::ev::MouseEvent| set_menu_open.set(false);

    // Keep the document title in step with the route
    let pathname = use_location().pathname;
    let organization = ctx.config.organization.clone();
    Effect::new(move |_| {
        let title = match Page::from_path(&pathname.get()) {
            Some(Page::Home) | None => organization.clone(),
            Some(page) => format!("{} | {}", page.label(), organization),
        };
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });

    view! {
        <header class="site-header">
            <div class="container header-row">
                <A href=Page::Home.path() attr:class="brand">
                    <img
                        class="brand-logo"
                        src=ctx.config.logo_url.clone()
                        alt=format!("{} Logo", ctx.config.organization)
                    />
                    <div class="brand-text">
                        <span class="brand-title">"KAKONDO PROTECTED AREA"</span>
                        <span class="brand-subtitle">"MANAGEMENT INC."</span>
                    </div>
                </A>

                <nav class="nav-desktop">
                    {Page::NAV.into_iter().map(|page| view! {
                        <A href=page.path() exact=true attr:class="nav-link">{page.label()}</A>
                    }).collect_view()}
                </nav>

                <div class="header-actions">
                    <A href=Page::GetInvolved.path() attr:class="btn btn-primary">{Page::GetInvolved.label()}</A>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="nav-mobile container" on:click=close_menu>
                    {Page::NAV.into_iter().map(|page| view! {
                        <A href=page.path() exact=true attr:class="nav-link">{page.label()}</A>
                    }).collect_view()}
                    <A href=Page::GetInvolved.path() attr:class="btn btn-primary">{Page::GetInvolved.label()}</A>
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = use_app_context().config;
    let copyright = format!("© 2025 {}. All rights reserved.", config.organization);

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3>{config.organization.clone()}</h3>
                    <p class="muted-light">{config.tagline.clone()}</p>
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <ul>
                        {Page::QUICK_LINKS.into_iter().map(|page| view! {
                            <li><A href=page.path()>{page.label()}</A></li>
                        }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Contact Info"</h4>
                    <ul>
                        {config.contact.address_lines.iter().take(3)
                            .map(|line| view! { <li>{line.clone()}</li> })
                            .collect_view()}
                        {config.primary_phone().map(|phone| view! { <li>{phone.to_string()}</li> })}
                        {config.primary_email().map(|email| view! { <li>{email.to_string()}</li> })}
                    </ul>
                </div>
                <div>
                    <h4>"Follow Us"</h4>
                    <div class="social">
                        <span class="social-link">"Facebook"</span>
                        <span class="social-link">"Instagram"</span>
                    </div>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{copyright}</p>
            </div>
        </footer>
    }
}
