use eframe::egui;
use log::info;

use crate::chat::ChatState;
use crate::scan::ScanPreview;

// ── App ─────────────────────────────────────────────────────────────────────

enum Screen {
    Chat,
    Scan(ScanPreview),
}

pub struct ScanChatApp {
    chat: ChatState,
    screen: Screen,
}

impl Default for ScanChatApp {
    fn default() -> Self {
        Self {
            chat: ChatState::new(),
            screen: Screen::Chat,
        }
    }
}

impl eframe::App for ScanChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let next = match &mut self.screen {
            Screen::Chat => self.chat.ui(ctx).map(|path| {
                info!("opening scan preview for {}", path.display());
                Screen::Scan(ScanPreview::new(path))
            }),
            Screen::Scan(preview) => preview.ui(ctx).then(|| Screen::Chat),
        };
        if let Some(next) = next {
            self.screen = next;
        }
    }
}
