/// Blocking, user-visible notifications.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

#[cfg(feature = "hydrate")]
impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

/// Stand-in where no browser is around to show a dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::warn!("{message}");
    }
}

#[cfg(feature = "hydrate")]
pub type PlatformNotifier = BrowserAlert;
#[cfg(not(feature = "hydrate"))]
pub type PlatformNotifier = LogNotifier;
