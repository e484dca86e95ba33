//! Root application module.
//!
//! Contains the main App component: an error boundary around the router.

use leptos::prelude::*;

use crate::components::AppRouter;

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #6b7280; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            margin-top: 1rem;
                            padding: 0.75rem 2rem;
                            border: none;
                            border-radius: 9999px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
