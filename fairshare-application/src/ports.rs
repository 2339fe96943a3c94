use crate::{error::RosterParseError, model::ParticipantInput};

pub trait RosterParser: Send + Sync {
    fn parse<'a>(&self, content: &'a str) -> Result<Vec<ParticipantInput<'a>>, RosterParseError>;
}
