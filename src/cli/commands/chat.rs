//! Chat command implementation.
//!
//! Loads the chat store from the snapshot database, runs one command
//! against it, and saves it back if the command changed anything.

use colored::Colorize;

use crate::cli::args::{ChatCommands, OutputFormat, SendArgs};
use crate::core::{Clock, SystemClock};
use crate::error::EdudeskError;
use crate::features::chat::{
    Attachment, ChatStorage, ChatStore, MessageKind, NewMessage, Role, Target,
};
use crate::output::{format_inbox, format_message, format_messages, to_json};

/// Result of a chat command.
struct Outcome {
    output: String,
    changed: bool,
}

impl Outcome {
    const fn read(output: String) -> Self {
        Self {
            output,
            changed: false,
        }
    }

    const fn write(output: String) -> Self {
        Self {
            output,
            changed: true,
        }
    }
}

/// Execute chat subcommands.
///
/// # Errors
///
/// Returns an error if storage fails, an id is unknown, or an argument is
/// rejected.
pub fn chat(
    cmd: ChatCommands,
    default_role: Role,
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    let storage = ChatStorage::new()?;
    let mut store = storage.load(SystemClock)?;

    let outcome = run(&mut store, cmd, default_role, format)?;
    if outcome.changed {
        storage.save(&store)?;
    }
    Ok(outcome.output)
}

fn run<C: Clock>(
    store: &mut ChatStore<C>,
    cmd: ChatCommands,
    default_role: Role,
    format: OutputFormat,
) -> Result<Outcome, EdudeskError> {
    match cmd {
        ChatCommands::Send(args) => send(store, args, default_role, format).map(Outcome::write),

        ChatCommands::Group { name, members } => {
            let conversation = store.create_group(&name, members);
            let output = match format {
                OutputFormat::Json => to_json(conversation)?,
                OutputFormat::Pretty => format!(
                    "{} {} ({} members, ID: {})",
                    "Created group:".green(),
                    conversation.name.bold(),
                    conversation.participants.len(),
                    conversation.id
                ),
            };
            Ok(Outcome::write(output))
        }

        ChatCommands::Join { conversation, user } => {
            if !store.add_participant(&conversation, &user) {
                return Err(EdudeskError::NotFound(format!(
                    "Group conversation {conversation}"
                )));
            }
            Ok(Outcome::write(format!("Added {user} to {conversation}")))
        }

        ChatCommands::Leave { conversation, user } => {
            if !store.remove_participant(&conversation, &user) {
                return Err(EdudeskError::NotFound(format!(
                    "Group conversation {conversation}"
                )));
            }
            Ok(Outcome::write(format!("Removed {user} from {conversation}")))
        }

        ChatCommands::Inbox { user } => {
            let conversations = store.conversations_for_user(&user);
            let unread = store.unread_total(&user);
            format_inbox(&conversations, &user, unread, format).map(Outcome::read)
        }

        ChatCommands::Thread {
            conversation,
            between,
        } => {
            if let Some(id) = conversation {
                let title = store
                    .conversation(&id)
                    .map(|c| c.name.clone())
                    .ok_or_else(|| EdudeskError::NotFound(format!("Conversation {id}")))?;
                let messages = store.messages_in_conversation(&id);
                format_messages(&messages, &title, format).map(Outcome::read)
            } else {
                let pair = between.unwrap_or_default();
                let [a, b] = pair.as_slice() else {
                    return Err(EdudeskError::InvalidArgument(
                        "--between takes exactly two user ids".to_string(),
                    ));
                };
                let messages = store.messages_between(a, b);
                format_messages(&messages, &format!("{a} ↔ {b}"), format).map(Outcome::read)
            }
        }

        ChatCommands::Read { conversation, user } => {
            if store.conversation(&conversation).is_none() {
                return Err(EdudeskError::NotFound(format!("Conversation {conversation}")));
            }
            store.mark_conversation_read(&conversation, &user);
            Ok(Outcome::write(format!(
                "Marked {conversation} read for {user}"
            )))
        }

        ChatCommands::ReadMessage { id } => {
            if !store.mark_message_read(&id) {
                return Err(EdudeskError::NotFound(format!("Message {id}")));
            }
            Ok(Outcome::write(format!("Marked message {id} read")))
        }

        ChatCommands::Edit { id, text } => {
            if !store.edit_message(&id, &text) {
                return Err(EdudeskError::NotFound(format!("Message {id}")));
            }
            let message = store
                .message(&id)
                .ok_or_else(|| EdudeskError::NotFound(format!("Message {id}")))?;
            format_message(message, format).map(Outcome::write)
        }

        ChatCommands::Delete { id } => {
            let deleted = store
                .delete_message(&id)
                .ok_or_else(|| EdudeskError::NotFound(format!("Message {id}")))?;
            let output = match format {
                OutputFormat::Json => to_json(&deleted)?,
                OutputFormat::Pretty => format!("Deleted message {}", deleted.id),
            };
            Ok(Outcome::write(output))
        }
    }
}

fn send<C: Clock>(
    store: &mut ChatStore<C>,
    args: SendArgs,
    default_role: Role,
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    let role = match args.role.as_deref() {
        Some(r) => Role::parse(r).ok_or_else(|| {
            EdudeskError::InvalidArgument(format!(
                "Unknown role: {r}. Expected admin, teacher, student or parent"
            ))
        })?,
        None => default_role,
    };

    let attachment = |file_name: String| Attachment {
        file_name,
        file_url: args.url.clone().unwrap_or_default(),
        file_size: args.size,
    };
    let kind = match (args.file, args.image) {
        (Some(name), _) => MessageKind::File(attachment(name)),
        (None, Some(name)) => MessageKind::Image(attachment(name)),
        (None, None) => MessageKind::Text,
    };

    let content = args.text.unwrap_or_default();
    if content.trim().is_empty() && kind.attachment().is_none() {
        return Err(EdudeskError::InvalidArgument(
            "Message text is empty".to_string(),
        ));
    }

    let target = match (args.to, args.conversation) {
        (Some(recipient), _) => Target::Direct(recipient),
        (None, Some(conversation)) => Target::Conversation(conversation),
        (None, None) => {
            return Err(EdudeskError::InvalidArgument(
                "Either --to or --conversation is required".to_string(),
            ))
        }
    };
    let missing = match &target {
        Target::Conversation(id) => Some(id.clone()),
        Target::Direct(_) => None,
    };

    let draft = NewMessage {
        sender_id: args.from,
        sender_name: args.name,
        sender_role: role,
        content,
        target,
        kind,
    };

    let Some(message) = store.send(draft) else {
        return Err(EdudeskError::NotFound(format!(
            "Conversation {}",
            missing.unwrap_or_default()
        )));
    };

    match format {
        OutputFormat::Json => to_json(message),
        OutputFormat::Pretty => Ok(format!(
            "{} {} (conversation {})",
            "Sent message".green(),
            message.id,
            message.conversation_id()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use crate::cli::args::Commands;
    use crate::core::ManualClock;
    use chrono::{TimeZone, Utc};
    use clap::Parser;

    fn store() -> ChatStore<ManualClock> {
        ChatStore::with_clock(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 9, 2, 8, 0, 0).unwrap(),
        ))
    }

    fn parse(args: &[&str]) -> ChatCommands {
        let mut argv = vec!["edudesk", "-o", "json", "chat"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Chat(chat) => chat.command,
            _ => panic!("Expected Chat command"),
        }
    }

    fn exec(store: &mut ChatStore<ManualClock>, args: &[&str]) -> Result<Outcome, EdudeskError> {
        run(store, parse(args), Role::Student, OutputFormat::Json)
    }

    #[test]
    fn test_send_direct_then_inbox() {
        let mut store = store();
        let outcome = exec(
            &mut store,
            &["send", "--from", "t1", "--name", "Ms. Reed", "--role", "teacher", "--to", "s1", "Quiz"],
        )
        .unwrap();
        assert!(outcome.changed);
        assert!(outcome.output.contains("\"sender_role\": \"teacher\""));

        let inbox = exec(&mut store, &["inbox", "--user", "s1"]).unwrap();
        assert!(!inbox.changed);
        assert!(inbox.output.contains("\"unread\": 1"));
    }

    #[test]
    fn test_send_uses_default_role() {
        let mut store = store();
        exec(&mut store, &["send", "--from", "s1", "--name", "Ana", "--to", "t1", "hi"]).unwrap();
        assert_eq!(store.messages()[0].sender_role, Role::Student);
    }

    #[test]
    fn test_send_rejects_unknown_role() {
        let mut store = store();
        let err = exec(
            &mut store,
            &["send", "--from", "s1", "--name", "Ana", "--role", "janitor", "--to", "t1", "hi"],
        )
        .err()
        .unwrap();
        assert!(matches!(err, EdudeskError::InvalidArgument(_)));
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_send_to_unknown_conversation() {
        let mut store = store();
        let err = exec(
            &mut store,
            &["send", "--from", "s1", "--name", "Ana", "--conversation", "nope", "hi"],
        )
        .err()
        .unwrap();
        assert!(matches!(err, EdudeskError::NotFound(_)));
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_send_empty_text_rejected_unless_attachment() {
        let mut store = store();
        let err = exec(&mut store, &["send", "--from", "s1", "--name", "Ana", "--to", "t1"])
            .err()
            .unwrap();
        assert!(matches!(err, EdudeskError::InvalidArgument(_)));

        exec(
            &mut store,
            &[
                "send", "--from", "s1", "--name", "Ana", "--to", "t1", "--image", "diagram.png",
                "--url", "https://files.school/d.png", "--size", "512",
            ],
        )
        .unwrap();
        let message = &store.messages()[0];
        assert!(matches!(message.kind, MessageKind::Image(_)));
        assert_eq!(message.kind.attachment().unwrap().file_size, 512);
    }

    #[test]
    fn test_group_thread_and_read() {
        let mut store = store();
        exec(&mut store, &["group", "--name", "Class 7B", "--members", "t1,s1,s2"]).unwrap();
        let id = store.conversations()[0].id.clone();

        exec(
            &mut store,
            &["send", "--from", "t1", "--name", "Ms. Reed", "--conversation", &id, "Quiz Friday"],
        )
        .unwrap();

        let thread = exec(&mut store, &["thread", "--conversation", &id]).unwrap();
        assert!(thread.output.contains("\"thread\": \"Class 7B\""));
        assert!(thread.output.contains("Quiz Friday"));

        exec(&mut store, &["read", "--conversation", &id, "--user", "s1"]).unwrap();
        assert_eq!(store.conversation(&id).unwrap().unread_count, 0);

        let err = exec(&mut store, &["read", "--conversation", "nope", "--user", "s1"])
            .err()
            .unwrap();
        assert!(matches!(err, EdudeskError::NotFound(_)));
    }

    #[test]
    fn test_join_and_leave() {
        let mut store = store();
        exec(&mut store, &["group", "--name", "Staff", "--members", "a1"]).unwrap();
        let id = store.conversations()[0].id.clone();

        exec(&mut store, &["join", "--conversation", &id, "--user", "t1"]).unwrap();
        assert!(store.conversation(&id).unwrap().has_participant("t1"));

        exec(&mut store, &["leave", "--conversation", &id, "--user", "t1"]).unwrap();
        assert!(!store.conversation(&id).unwrap().has_participant("t1"));

        assert!(exec(&mut store, &["join", "--conversation", "nope", "--user", "t1"]).is_err());
    }

    #[test]
    fn test_thread_between() {
        let mut store = store();
        exec(&mut store, &["send", "--from", "t1", "--name", "R", "--to", "s1", "one"]).unwrap();
        exec(&mut store, &["send", "--from", "s1", "--name", "A", "--to", "t1", "two"]).unwrap();
        exec(&mut store, &["send", "--from", "s2", "--name", "B", "--to", "t1", "other"]).unwrap();

        let thread = exec(&mut store, &["thread", "--between", "s1", "t1"]).unwrap();
        assert!(thread.output.contains("\"count\": 2"));
        assert!(!thread.output.contains("other"));
    }

    #[test]
    fn test_edit_delete_and_read_message() {
        let mut store = store();
        exec(&mut store, &["send", "--from", "t1", "--name", "R", "--to", "s1", "typo"]).unwrap();
        let id = store.messages()[0].id.clone();

        let edited = exec(&mut store, &["edit", &id, "fixed"]).unwrap();
        assert!(edited.output.contains("fixed"));
        assert!(edited.output.contains("edited_at"));

        exec(&mut store, &["read-message", &id]).unwrap();
        assert!(store.message(&id).unwrap().is_read);

        exec(&mut store, &["delete", &id]).unwrap();
        assert!(store.message(&id).is_none());

        let err = exec(&mut store, &["delete", &id]).err().unwrap();
        assert!(matches!(err, EdudeskError::NotFound(_)));
        assert!(exec(&mut store, &["edit", &id, "again"]).is_err());
        assert!(exec(&mut store, &["read-message", &id]).is_err());
    }
}
