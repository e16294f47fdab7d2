/// Formatter adapters turning view frames into terminal text
mod card_formatter;

pub use card_formatter::CardFormatter;
