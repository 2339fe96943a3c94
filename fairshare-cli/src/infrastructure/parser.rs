use fairshare_application::{ParticipantInput, RosterParseError, RosterParser};
use fairshare_domain::RawAmount;
use fairshare_parser::{ParseError, parse_roster};

#[derive(Default)]
pub struct FairshareRosterParser;

impl RosterParser for FairshareRosterParser {
    fn parse<'a>(&self, content: &'a str) -> Result<Vec<ParticipantInput<'a>>, RosterParseError> {
        match parse_roster(content) {
            Ok(roster) => Ok(roster
                .entries
                .into_iter()
                .map(|entry| ParticipantInput {
                    name: Some(entry.name),
                    paid: entry.amount.map_or(RawAmount::Missing, RawAmount::Text),
                })
                .collect()),
            Err(err) => Err(match err {
                ParseError::SyntaxError { line, detail } => {
                    RosterParseError::SyntaxError { line, detail }
                }
            }),
        }
    }
}
