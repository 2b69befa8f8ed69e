use dioxus::prelude::*;
use uuid::Uuid;

use crate::shared::utils::sleep_ms;

/// How long a toast stays on screen before auto-dismissing.
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// One notification shown by the toast host.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Fire-and-forget notification surface. Callers never consume a result.
#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: Signal<Vec<Toast>>,
}

impl ToastState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.write().retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = Uuid::new_v4();
        self.toasts.write().push(Toast { id, kind, message });

        let mut toasts = self.toasts;
        spawn(async move {
            sleep_ms(TOAST_DISMISS_MS).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}

/// Hook providing the notification surface.
pub fn use_toasts() -> ToastState {
    ToastState {
        toasts: use_signal(Vec::new),
    }
}
