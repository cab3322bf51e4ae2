use eframe::egui;
use log::info;
use std::path::PathBuf;

// ── Data Model ──────────────────────────────────────────────────────────────

/// Canned bot replies, cycled in order. There is no backend behind the chat.
const STUB_REPLIES: &[&str] = &[
    "Got it!",
    "Interesting, tell me more.",
    "Noted.",
    "That looks great.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug)]
pub enum Body {
    Text(String),
    Image(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Message {
    pub sender: Sender,
    pub body: Body,
}

// ── Chat State ──────────────────────────────────────────────────────────────

pub struct ChatState {
    messages: Vec<Message>,
    draft: String,
    reply_cursor: usize,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                sender: Sender::Bot,
                body: Body::Text("Hi! Send a message or attach an image to scan.".to_owned()),
            }],
            draft: String::new(),
            reply_cursor: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append the trimmed draft as a user message, followed by the next
    /// canned reply. Whitespace-only drafts send nothing.
    pub fn send_draft(&mut self) {
        let text = self.draft.trim();
        if text.is_empty() {
            return;
        }
        self.messages.push(Message {
            sender: Sender::User,
            body: Body::Text(text.to_owned()),
        });
        self.draft.clear();
        self.push_stub_reply();
    }

    pub fn attach_image(&mut self, path: PathBuf) {
        info!("attaching image {}", path.display());
        self.messages.push(Message {
            sender: Sender::User,
            body: Body::Image(path),
        });
    }

    fn push_stub_reply(&mut self) {
        let reply = STUB_REPLIES[self.reply_cursor % STUB_REPLIES.len()];
        self.reply_cursor += 1;
        self.messages.push(Message {
            sender: Sender::Bot,
            body: Body::Text(reply.to_owned()),
        });
    }
}

fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
        .pick_file()
}

// ── Chat Screen UI ──────────────────────────────────────────────────────────

impl ChatState {
    /// Returns the image path to open in the scan preview, if the user asked
    /// for one this frame.
    pub fn ui(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        let mut open_scan = None;

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("📎").on_hover_text("Attach an image").clicked() {
                    if let Some(path) = pick_image() {
                        self.attach_image(path);
                    }
                }
                let send_clicked = ui
                    .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let send_clicked = ui.button("Send").clicked();
                        let edit = egui::TextEdit::singleline(&mut self.draft)
                            .hint_text("Message")
                            .desired_width(ui.available_width());
                        let response = ui.add(edit);
                        let enter = response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if send_clicked || enter {
                            response.request_focus();
                        }
                        send_clicked || enter
                    })
                    .inner;
                if send_clicked {
                    self.send_draft();
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for msg in &self.messages {
                        let is_user = msg.sender == Sender::User;
                        let layout = if is_user {
                            egui::Layout::right_to_left(egui::Align::Min)
                        } else {
                            egui::Layout::left_to_right(egui::Align::Min)
                        };
                        ui.with_layout(layout, |ui| {
                            let fill = if is_user {
                                egui::Color32::from_rgb(0, 92, 75)
                            } else {
                                egui::Color32::from_gray(60)
                            };
                            egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                                ui.set_max_width(ui.available_width() * 0.75);
                                match &msg.body {
                                    Body::Text(text) => {
                                        ui.label(text);
                                    }
                                    Body::Image(path) => {
                                        ui.vertical(|ui| {
                                            // The image widget loads the URI
                                            // itself and shows its own
                                            // spinner/error state.
                                            ui.add(
                                                egui::Image::from_uri(format!(
                                                    "file://{}",
                                                    path.display()
                                                ))
                                                .max_width(220.0),
                                            );
                                            if ui.button("Scan").clicked() {
                                                open_scan = Some(path.clone());
                                            }
                                        });
                                    }
                                }
                            });
                        });
                        ui.add_space(4.0);
                    }
                });
        });

        open_scan
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_user_message_then_stub_reply() {
        let mut chat = ChatState::new();
        let before = chat.messages().len();
        chat.draft = "hello there".to_owned();
        chat.send_draft();

        let messages = chat.messages();
        assert_eq!(messages.len(), before + 2);
        assert_eq!(messages[before].sender, Sender::User);
        assert!(matches!(&messages[before].body, Body::Text(t) if t == "hello there"));
        assert_eq!(messages[before + 1].sender, Sender::Bot);
        assert!(chat.draft.is_empty());
    }

    #[test]
    fn whitespace_draft_sends_nothing() {
        let mut chat = ChatState::new();
        let before = chat.messages().len();
        chat.draft = "   \t".to_owned();
        chat.send_draft();
        assert_eq!(chat.messages().len(), before);
    }

    #[test]
    fn stub_replies_cycle_in_order() {
        let mut chat = ChatState::new();
        for i in 0..STUB_REPLIES.len() + 1 {
            chat.draft = format!("msg {i}");
            chat.send_draft();
        }
        let replies: Vec<&str> = chat
            .messages()
            .iter()
            .skip(1) // greeting
            .filter_map(|m| match (&m.sender, &m.body) {
                (Sender::Bot, Body::Text(t)) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(replies[0], STUB_REPLIES[0]);
        assert_eq!(replies[STUB_REPLIES.len()], STUB_REPLIES[0]);
    }

    #[test]
    fn attach_appends_image_message_without_reply() {
        let mut chat = ChatState::new();
        let before = chat.messages().len();
        chat.attach_image(PathBuf::from("/tmp/receipt.png"));

        let messages = chat.messages();
        assert_eq!(messages.len(), before + 1);
        assert_eq!(messages[before].sender, Sender::User);
        assert!(
            matches!(&messages[before].body, Body::Image(p) if p == &PathBuf::from("/tmp/receipt.png"))
        );
    }
}
