/*!
 * System Services
 * Event bus, notifications, clipboard and window lifecycle
 */

pub mod bus;
pub mod clipboard;
pub mod notifications;
pub mod window;

pub use bus::{
    EventBus, EventCallback, FsChange, FsChangeKind, NotificationEvent, Subscription,
    SubscriptionId, SystemEvent, Topic,
};
pub use clipboard::{Clipboard, ClipboardContent, ClipboardKind};
pub use notifications::{NotificationCenter, NotificationId, Severity, SystemNotification};
pub use window::{AppInstance, WindowManager, WindowManagerBuilder};
