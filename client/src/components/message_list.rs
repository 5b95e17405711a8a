//! Thread rendering shared by conversations and the collaboration portal.
//!
//! Both message kinds are flattened into [`MessageView`] rows first so the
//! list markup exists once.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use inbox::CollaborationSync;
use leptos::prelude::*;
use wire::{Attachment, CollaborationMessage, ConversationMessage, Id, MessageKind};

/// One rendered message row.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageView {
    pub id: Id,
    pub author: String,
    pub content: String,
    pub kind: MessageKind,
    pub sent_label: String,
    pub own: bool,
    pub attachments: Vec<Attachment>,
}

impl MessageView {
    /// Conversation row; the thread only knows user ids, so the author is
    /// "You" or "Them".
    pub fn from_conversation(message: &ConversationMessage, current_user: Option<Id>) -> Self {
        let own = current_user == Some(message.user_id);
        Self {
            id: message.id,
            author: if own { "You".to_owned() } else { "Them".to_owned() },
            content: message.content.clone(),
            kind: message.message_type,
            sent_label: message.created_at.short_label(),
            own,
            attachments: message.attachments.clone(),
        }
    }

    pub fn from_collaboration(message: &CollaborationMessage, sync: &CollaborationSync) -> Self {
        Self {
            id: message.id,
            author: sync.sender_name(message),
            content: message.content.clone(),
            kind: message.message_type,
            sent_label: message.created_at.short_label(),
            own: sync.is_own(message),
            attachments: message.attachments.clone(),
        }
    }

    /// Link messages are rendered as anchors only for http(s) targets.
    pub fn link_target(&self) -> Option<&str> {
        let content = self.content.trim();
        (self.kind == MessageKind::Link && (content.starts_with("https://") || content.starts_with("http://")))
            .then_some(content)
    }
}

#[component]
pub fn MessageList(#[prop(into)] messages: Signal<Vec<MessageView>>) -> impl IntoView {
    view! {
        <ul class="message-list">
            <Show when=move || messages.with(Vec::is_empty)>
                <li class="message-list__empty">"No messages yet."</li>
            </Show>
            <For
                each=move || messages.get()
                key=|m| m.id
                children=move |m| {
                    let body = match m.link_target() {
                        Some(href) => {
                            let href = href.to_owned();
                            view! {
                                <a href=href.clone() target="_blank" rel="noopener noreferrer">{href.clone()}</a>
                            }
                                .into_any()
                        }
                        None => view! { <span>{m.content.clone()}</span> }.into_any(),
                    };
                    view! {
                        <li class="message" class:message--own=m.own>
                            <div class="message__meta">
                                <span class="message__author">{m.author.clone()}</span>
                                <span class="message__time">{m.sent_label.clone()}</span>
                            </div>
                            <div class="message__body">{body}</div>
                            <ul class="message__attachments">
                                {m
                                    .attachments
                                    .iter()
                                    .map(|a| {
                                        view! {
                                            <li>
                                                <a href=a.url.clone() target="_blank" rel="noopener noreferrer">
                                                    {a.file_name.clone()}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </li>
                    }
                }
            />
        </ul>
    }
}
