use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::{Session, SessionError, Turn, from_config};
use crate::ai::topics::resolve;
use crate::cli::topics;
use crate::core::{AppConfig, init_tracing};

/// A line typed at the prompt.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Topics,
    Topic(&'a str),
    Message(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed == "/topics" {
            Input::Topics
        } else if let Some(arg) = trimmed.strip_prefix("/topic ") {
            Input::Topic(arg.trim())
        } else {
            Input::Message(line)
        }
    }
}

fn print_turns(turns: &[Turn]) {
    for turn in turns {
        println!("{}: {}", turn.role(), turn.text());
    }
}

pub async fn run() -> Result<()> {
    init_tracing(&format!("{}=warn", env!("CARGO_CRATE_NAME")));

    let config = AppConfig::from_env()?;
    let mut session = Session::new(from_config(&config));
    let mut rl = DefaultEditor::new()?;

    print_turns(session.initialize().turns());
    println!("(/topics lists topics, /topic <number|code> picks one)");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                let seen = session.render_view().len();

                let result = match Input::parse(&line) {
                    Input::Topics => {
                        topics::run();
                        continue;
                    }
                    Input::Topic(arg) => {
                        let Some(label) = resolve(arg) else {
                            println!("Unknown topic: {}", arg);
                            continue;
                        };
                        session.submit_topic(label).await.map(|_| ())
                    }
                    Input::Message(text) => session.submit_message(text).await.map(|_| ()),
                };

                print_turns(&session.render_view().turns()[seen..]);
                match result {
                    Ok(()) => {}
                    Err(SessionError::Service { source, .. }) => {
                        println!("Tutor unavailable, try again. ({})", source);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topics() {
        assert_eq!(Input::parse("/topics"), Input::Topics);
        assert_eq!(Input::parse("  /topics \n"), Input::Topics);
    }

    #[test]
    fn test_parse_topic() {
        assert_eq!(Input::parse("/topic 13"), Input::Topic("13"));
        assert_eq!(Input::parse("/topic  B2.2 "), Input::Topic("B2.2"));
    }

    #[test]
    fn test_parse_message() {
        assert_eq!(
            Input::parse("photosynthesis?"),
            Input::Message("photosynthesis?")
        );
        assert_eq!(Input::parse("/topicality"), Input::Message("/topicality"));
        assert_eq!(Input::parse(""), Input::Message(""));
    }
}
