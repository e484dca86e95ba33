//! Pages of the demo shell, one per [`AppRoute`](crate::models::AppRoute).

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::Button;
use crate::components::icons as ic;
use crate::config::{ACCEPTED_LABEL, APP_NAME, APP_TAGLINE};
use crate::models::{AppRoute, ButtonColor, ButtonSize, ButtonVariant};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Landing page with one button per behavior.
#[component]
pub fn Home() -> impl IntoView {
    let greeted = RwSignal::new(false);

    view! {
        <section class=css::hero>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::tagline>{APP_TAGLINE}</p>
            <div class=css::actions>
                <Button
                    label=format!("Upload {}", ACCEPTED_LABEL)
                    icon=ic::UPLOAD
                    leading=true
                    color=ButtonColor::Primary
                    open_file=true
                />
                <Button
                    label="See pricing"
                    href=AppRoute::Pricing.to_hash()
                    icon=ic::ARROW_RIGHT
                    color=ButtonColor::Primary
                    variant=ButtonVariant::Link
                />
                <Button
                    label="Say hello"
                    size=ButtonSize::Small
                    color=ButtonColor::Light
                    on_click=move |_: MouseEvent| greeted.set(true)
                />
            </div>
            <Show when=move || greeted.get()>
                <p class=css::note>"Hello! Pick a tender document to get started."</p>
            </Show>
        </section>
    }
}

/// Shown after an accepted document pick.
#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <section class=css::hero>
            <span class=css::badge>
                <Icon icon=ic::FILE_PDF />
            </span>
            <h1 class=css::title>"Document received"</h1>
            <p class=css::tagline>"Your document is queued for review."</p>
            <BackHome />
        </section>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <section class=css::hero>
            <h1 class=css::title>"Pricing"</h1>
            <p class=css::tagline>"Every review is free while in preview."</p>
            <BackHome />
        </section>
    }
}

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class=css::hero>
            <h1 class=css::title>"Not found"</h1>
            <p class=css::tagline>{format!("Nothing lives at /{}", path)}</p>
            <BackHome />
        </section>
    }
}

#[component]
fn BackHome() -> impl IntoView {
    view! {
        <Button
            label="Back home"
            href=AppRoute::Home.to_hash()
            icon=ic::ARROW_LEFT
            leading=true
            color=ButtonColor::Transparent
            variant=ButtonVariant::Link
        />
    }
}
