//! Activation dispatch.
//!
//! Every press of a button resolves to exactly one of three behaviors, in
//! priority order:
//!
//! 1. **File mode** - suppress the default action and open the hidden chooser.
//! 2. **Callback** - hand the event to the caller's handler.
//! 3. **Default** - do nothing; the browser follows `href` if there is one.
//!
//! The priority is resolved into an [`Activation`] before any effect runs,
//! so a file-mode button never reaches its callback.

use log::{debug, warn};

/// An activation whose default browser action can be suppressed.
pub trait ActivationEvent {
    /// Stops the browser from running the default action (e.g. following a link).
    fn suppress_default(&self);
}

/// The hidden file chooser owned by a file-mode button.
pub trait FileChooser {
    /// Opens the native chooser dialog.
    ///
    /// Returns `false` when the chooser is not mounted.
    fn open(&self) -> bool;

    /// Clears the current selection so the same file fires a new selection event.
    fn reset(&self);
}

/// Behavior flags fixed when the button is built.
#[derive(Clone, Debug)]
pub struct ActivationConfig<F> {
    /// Open the file chooser instead of anything else.
    pub file_mode: bool,
    /// Caller handler, used only when file mode is off.
    pub on_activate: Option<F>,
    /// Default navigation target.
    pub href: Option<String>,
}

impl<F> Default for ActivationConfig<F> {
    fn default() -> Self {
        Self {
            file_mode: false,
            on_activate: None,
            href: None,
        }
    }
}

/// The single behavior an activation resolves to.
#[derive(Debug)]
pub enum Activation<'a, F> {
    OpenChooser,
    Invoke(&'a F),
    FollowDefault(Option<&'a str>),
}

impl<F> ActivationConfig<F> {
    /// Resolves the flags into one behavior: file mode, then callback, then default.
    pub fn resolve(&self) -> Activation<'_, F> {
        if self.file_mode {
            Activation::OpenChooser
        } else if let Some(on_activate) = &self.on_activate {
            Activation::Invoke(on_activate)
        } else {
            Activation::FollowDefault(self.href.as_deref())
        }
    }
}

/// What [`dispatch`] actually did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// Default suppressed and the chooser dialog requested.
    ChooserOpened,
    /// Default suppressed, but there was no mounted chooser to open.
    ChooserUnmounted,
    /// The caller's handler received the event.
    Invoked,
    /// Nothing intercepted; the browser handles the activation.
    FollowedDefault { href: Option<String> },
}

/// Runs one activation against `config`.
pub fn dispatch<E, F, C>(config: &ActivationConfig<F>, event: E, chooser: &C) -> Dispatched
where
    E: ActivationEvent,
    F: Fn(E),
    C: FileChooser + ?Sized,
{
    match config.resolve() {
        Activation::OpenChooser => {
            event.suppress_default();
            if chooser.open() {
                debug!("activation: file chooser opened");
                Dispatched::ChooserOpened
            } else {
                warn!("activation: file chooser not mounted, ignoring");
                Dispatched::ChooserUnmounted
            }
        }
        Activation::Invoke(on_activate) => {
            debug!("activation: invoking caller handler");
            on_activate(event);
            Dispatched::Invoked
        }
        Activation::FollowDefault(href) => {
            debug!("activation: default behavior (href: {:?})", href);
            Dispatched::FollowedDefault {
                href: href.map(str::to_string),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MockEvent {
        suppressed: Cell<bool>,
    }

    impl ActivationEvent for &MockEvent {
        fn suppress_default(&self) {
            self.suppressed.set(true);
        }
    }

    struct MockChooser {
        mounted: bool,
        opened: Cell<usize>,
        resets: Cell<usize>,
    }

    impl MockChooser {
        fn mounted() -> Self {
            Self {
                mounted: true,
                opened: Cell::new(0),
                resets: Cell::new(0),
            }
        }

        fn unmounted() -> Self {
            Self {
                mounted: false,
                ..Self::mounted()
            }
        }
    }

    impl FileChooser for MockChooser {
        fn open(&self) -> bool {
            if self.mounted {
                self.opened.set(self.opened.get() + 1);
            }
            self.mounted
        }

        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    fn config<'a>(
        file_mode: bool,
        calls: Option<&'a Cell<usize>>,
        href: Option<&str>,
    ) -> ActivationConfig<impl Fn(&MockEvent) + 'a> {
        ActivationConfig {
            file_mode,
            on_activate: calls.map(|calls| move |_: &MockEvent| calls.set(calls.get() + 1)),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn test_file_mode_never_invokes_callback() {
        let calls = Cell::new(0);
        for href in [None, Some("/pricing")] {
            for with_callback in [false, true] {
                let event = MockEvent::default();
                let chooser = MockChooser::mounted();
                let cfg = config(true, with_callback.then_some(&calls), href);

                assert_eq!(dispatch(&cfg, &event, &chooser), Dispatched::ChooserOpened);
                assert!(event.suppressed.get());
                assert_eq!(chooser.opened.get(), 1);
            }
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_callback_invoked_exactly_once() {
        let calls = Cell::new(0);
        let event = MockEvent::default();
        let chooser = MockChooser::mounted();
        let cfg = config(false, Some(&calls), None);

        assert_eq!(dispatch(&cfg, &event, &chooser), Dispatched::Invoked);
        assert_eq!(calls.get(), 1);
        assert_eq!(chooser.opened.get(), 0);
        // The caller decides whether to suppress the default
        assert!(!event.suppressed.get());
    }

    #[test]
    fn test_callback_receives_the_event() {
        let event = MockEvent::default();
        let cfg = ActivationConfig {
            file_mode: false,
            on_activate: Some(|e: &MockEvent| e.suppress_default()),
            href: None,
        };

        dispatch(&cfg, &event, &MockChooser::mounted());
        assert!(event.suppressed.get());
    }

    #[test]
    fn test_default_follows_href() {
        let event = MockEvent::default();
        let chooser = MockChooser::mounted();
        let cfg = config(false, None, Some("/pricing"));

        assert_eq!(
            dispatch(&cfg, &event, &chooser),
            Dispatched::FollowedDefault {
                href: Some("/pricing".to_string())
            }
        );
        assert!(!event.suppressed.get());
        assert_eq!(chooser.opened.get(), 0);
    }

    #[test]
    fn test_default_without_href_does_nothing() {
        let event = MockEvent::default();
        let cfg = config(false, None, None);

        assert_eq!(
            dispatch(&cfg, &event, &MockChooser::mounted()),
            Dispatched::FollowedDefault { href: None }
        );
        assert!(!event.suppressed.get());
    }

    #[test]
    fn test_unmounted_chooser_is_noop() {
        let event = MockEvent::default();
        let chooser = MockChooser::unmounted();
        let cfg = config(true, None, None);

        assert_eq!(dispatch(&cfg, &event, &chooser), Dispatched::ChooserUnmounted);
        assert!(event.suppressed.get());
        assert_eq!(chooser.opened.get(), 0);
        assert_eq!(chooser.resets.get(), 0);
    }

    #[test]
    fn test_resolve_priority() {
        let calls = Cell::new(0);
        assert!(matches!(
            config(true, Some(&calls), Some("/x")).resolve(),
            Activation::OpenChooser
        ));
        assert!(matches!(
            config(false, Some(&calls), Some("/x")).resolve(),
            Activation::Invoke(_)
        ));
        assert!(matches!(
            config(false, None, Some("/x")).resolve(),
            Activation::FollowDefault(Some("/x"))
        ));
        assert!(matches!(
            ActivationConfig::<fn(&MockEvent)>::default().resolve(),
            Activation::FollowDefault(None)
        ));
    }
}
