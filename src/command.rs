use strum::Display;

pub const USAGE: &str = "\
Usage:
  playctl list
  playctl play <path> [playlist_name]
  playctl index <index> [playlist_name]
  playctl remove <index> [playlist_name]
  playctl rename <old_name> <new_name>
  playctl delete <playlist_name>
  playctl switch <playlist_name>";

/// One invocation of the command line tool.
/// Indexes are kept as typed by the user and only coerced when the command runs.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    List,
    Play {
        path: String,
        playlist: Option<String>,
    },
    Index {
        index: String,
        playlist: Option<String>,
    },
    Remove {
        index: String,
        playlist: Option<String>,
    },
    Rename {
        old: String,
        new: String,
    },
    Delete {
        name: String,
    },
    Switch {
        name: String,
    },
}

impl Command {
    /// Parses the positional arguments following the program name.
    /// Returns None for unknown commands or missing required arguments. Extra arguments are
    /// ignored.
    pub fn parse(args: &[String]) -> Option<Self> {
        let (cmd, rest) = args.split_first()?;
        let arg = |i: usize| rest.get(i).cloned();
        let command = match cmd.as_str() {
            "list" => Command::List,
            "play" => Command::Play {
                path: arg(0)?,
                playlist: arg(1),
            },
            "index" => Command::Index {
                index: arg(0)?,
                playlist: arg(1),
            },
            "remove" => Command::Remove {
                index: arg(0)?,
                playlist: arg(1),
            },
            "rename" => Command::Rename {
                old: arg(0)?,
                new: arg(1)?,
            },
            "delete" => Command::Delete { name: arg(0)? },
            "switch" => Command::Switch { name: arg(0)? },
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list() {
        assert_eq!(Command::parse(&args(&["list"])), Some(Command::List));
    }

    #[test]
    fn test_optional_playlist() {
        assert_eq!(
            Command::parse(&args(&["play", "song.mp3"])),
            Some(Command::Play {
                path: "song.mp3".to_string(),
                playlist: None
            })
        );
        assert_eq!(
            Command::parse(&args(&["remove", "2", "rock"])),
            Some(Command::Remove {
                index: "2".to_string(),
                playlist: Some("rock".to_string())
            })
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(Command::parse(&args(&["rename", "only_one_arg"])), None);
        assert_eq!(Command::parse(&args(&["play"])), None);
        assert_eq!(Command::parse(&args(&["index"])), None);
        assert_eq!(Command::parse(&args(&["delete"])), None);
        assert_eq!(Command::parse(&args(&["switch"])), None);
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(Command::parse(&args(&["shuffle"])), None);
        assert_eq!(Command::parse(&[]), None);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(
            Command::parse(&args(&["delete", "pop", "extra"])),
            Some(Command::Delete {
                name: "pop".to_string()
            })
        );
    }

    #[test]
    fn test_index_not_coerced_while_parsing() {
        assert_eq!(
            Command::parse(&args(&["index", "abc"])),
            Some(Command::Index {
                index: "abc".to_string(),
                playlist: None
            })
        );
        assert_eq!(Command::List.to_string(), "list");
    }
}
