use jobboard_core::{JobId, Msg, Route, Section, UserProfile};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  refresh                 reload the job list
  all | recommended       switch section
  home | profile          navigate
  like <id>               like a job
  comments <id>           show or hide comments
  draft <id> <text>       edit the comment draft
  post <id>               post the current draft
  comment <id> <text>     edit the draft and post it
  bookmark <id>           toggle bookmark
  share <id>              share the job link
  skills <a, b, ...>      set profile skills
  experience|education|goals <text>   set profile text
  show                    redraw the board
  help                    this text
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    EditProfile(ProfileEdit),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEdit {
    Skills(Vec<String>),
    Experience(String),
    Education(String),
    CareerGoals(String),
}

impl ProfileEdit {
    pub fn apply(self, profile: &UserProfile) -> UserProfile {
        let mut next = profile.clone();
        match self {
            ProfileEdit::Skills(skills) => next.skills = skills,
            ProfileEdit::Experience(text) => next.experience = text,
            ProfileEdit::Education(text) => next.education = text,
            ProfileEdit::CareerGoals(text) => next.career_goals = text,
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("'{0}' needs a job id")]
    MissingJobId(&'static str),
    #[error("'{0}' is not a job id")]
    InvalidJobId(String),
}

/// Parses one input line. Returns `Ok(None)` for blank lines.
///
/// `now_millis` stamps comments posted by this line.
pub fn parse(line: &str, now_millis: i64) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "show" => Command::Show,
        "refresh" => Command::Dispatch(vec![Msg::RefreshRequested]),
        "all" => Command::Dispatch(vec![Msg::SectionSelected(Section::All)]),
        "recommended" => Command::Dispatch(vec![Msg::SectionSelected(Section::Recommended)]),
        "home" => Command::Dispatch(vec![Msg::Navigate(Route::Home)]),
        "profile" => Command::Dispatch(vec![Msg::Navigate(Route::Profile)]),
        "like" => {
            let (job_id, _) = job_id_arg("like", rest)?;
            Command::Dispatch(vec![Msg::LikeClicked { job_id }])
        }
        "comments" => {
            let (job_id, _) = job_id_arg("comments", rest)?;
            Command::Dispatch(vec![Msg::CommentsToggled { job_id }])
        }
        "draft" => {
            let (job_id, text) = job_id_arg("draft", rest)?;
            Command::Dispatch(vec![Msg::CommentDraftChanged {
                job_id,
                text: text.to_string(),
            }])
        }
        "post" => {
            let (job_id, _) = job_id_arg("post", rest)?;
            Command::Dispatch(vec![Msg::CommentSubmitted { job_id, now_millis }])
        }
        "comment" => {
            let (job_id, text) = job_id_arg("comment", rest)?;
            Command::Dispatch(vec![
                Msg::CommentDraftChanged {
                    job_id,
                    text: text.to_string(),
                },
                Msg::CommentSubmitted { job_id, now_millis },
            ])
        }
        "bookmark" => {
            let (job_id, _) = job_id_arg("bookmark", rest)?;
            Command::Dispatch(vec![Msg::BookmarkToggled { job_id }])
        }
        "share" => {
            let (job_id, _) = job_id_arg("share", rest)?;
            Command::Dispatch(vec![Msg::ShareClicked { job_id }])
        }
        "skills" => Command::EditProfile(ProfileEdit::Skills(
            rest.split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        )),
        "experience" => Command::EditProfile(ProfileEdit::Experience(rest.to_string())),
        "education" => Command::EditProfile(ProfileEdit::Education(rest.to_string())),
        "goals" => Command::EditProfile(ProfileEdit::CareerGoals(rest.to_string())),
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn job_id_arg<'a>(command: &'static str, rest: &'a str) -> Result<(JobId, &'a str), CommandError> {
    let (raw, tail) = match rest.split_once(char::is_whitespace) {
        Some((raw, tail)) => (raw, tail),
        None => (rest, ""),
    };
    if raw.is_empty() {
        return Err(CommandError::MissingJobId(command));
    }
    let job_id = raw
        .trim_start_matches('#')
        .parse::<JobId>()
        .map_err(|_| CommandError::InvalidJobId(raw.to_string()))?;
    Ok((job_id, tail))
}
