//! Reusable pill button.
//!
//! One component, three behaviors, chosen per press by
//! [`dispatch`](crate::core::dispatch):
//!
//! - **File mode** (`open_file`): opens a hidden PDF chooser; an accepted
//!   pick navigates to the upload page, anything else raises an alert.
//! - **Action** (`on_click`): forwards the click to the caller.
//! - **Link** (`href`): renders an `<a>` and lets the browser navigate.
//!
//! ```ignore
//! <Button label="Upload PDF" icon=ic::UPLOAD leading=true open_file=true />
//! <Button label="See pricing" href="#/pricing" variant=ButtonVariant::Link />
//! <Button label="Say hello" on_click=move |_| greeted.set(true) />
//! ```

mod chooser;
mod style;

pub use chooser::selection_from_event;
pub use style::{ButtonStyle, ElementKind};

use icondata::Icon as IconData;
use leptos::ev::MouseEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::router::RouteContext;
use crate::core::{AcceptPolicy, ActivationConfig, Navigator, dispatch, handle_selection};
use crate::models::{ButtonColor, ButtonSize, ButtonVariant};
use crate::utils::dom::{AlertNotifier, HashNavigator};

/// Styled button acting as a link, an action trigger or a PDF picker.
///
/// `open_file` takes precedence over `on_click`; `href` is only followed
/// when neither intercepts the press.
#[component]
pub fn Button(
    /// Button text.
    #[prop(into)]
    label: String,
    /// Navigation target; renders an `<a>` unless `open_file` is set.
    #[prop(optional, into)]
    href: Option<String>,
    /// Icon shown next to the label.
    #[prop(optional, into)]
    icon: Option<IconData>,
    /// Put the icon before the label instead of after it.
    #[prop(optional)]
    leading: bool,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] color: ButtonColor,
    #[prop(optional)] variant: ButtonVariant,
    /// Stretch to the container width.
    #[prop(optional)]
    block: bool,
    /// Click handler, ignored in file mode.
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
    /// Extra classes appended after the computed ones.
    #[prop(optional, into)]
    class: Option<String>,
    /// Open a PDF chooser on press.
    #[prop(optional)]
    open_file: bool,
) -> impl IntoView {
    let chooser = NodeRef::<Input>::new();

    let style = ButtonStyle {
        size,
        color,
        variant,
        block,
    };
    let button_class = style.button_class(class.as_deref());
    let icon_class = style.icon_class();

    let config = ActivationConfig {
        file_mode: open_file,
        on_activate: on_click.map(|cb| move |ev: MouseEvent| cb.run(ev)),
        href: href.clone(),
    };
    let on_activate = move |ev: MouseEvent| {
        dispatch(&config, ev, &chooser);
    };

    let icon_view = move |class: String| {
        icon.map(|icon| {
            view! {
                <span class=class>
                    <Icon icon=icon />
                </span>
            }
        })
    };
    let (before, after) = if leading {
        (icon_view(icon_class), None)
    } else {
        (None, icon_view(icon_class))
    };
    let content = view! { {before} {label} {after} };

    let element = match ElementKind::resolve(href.is_some(), open_file) {
        ElementKind::Anchor => view! {
            <a href=href class=button_class on:click=on_activate>
                {content}
            </a>
        }
        .into_any(),
        ElementKind::Button => view! {
            <button type="button" class=button_class on:click=on_activate>
                {content}
            </button>
        }
        .into_any(),
    };

    let route_ctx = use_context::<RouteContext>();
    let chooser_input = open_file.then(|| {
        let policy = AcceptPolicy::pdf_upload();
        let accept = policy.accept_attr();

        let on_change = move |ev: web_sys::Event| {
            let selection = selection_from_event(&ev);
            let navigator: &dyn Navigator = match &route_ctx {
                Some(ctx) => ctx,
                None => &HashNavigator,
            };
            handle_selection(&policy, selection, &chooser, navigator, &AlertNotifier);
        };

        view! {
            <input
                type="file"
                node_ref=chooser
                accept=accept
                multiple=false
                style="display: none"
                on:change=on_change
            />
        }
    });

    view! {
        {element}
        {chooser_input}
    }
}
