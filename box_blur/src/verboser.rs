use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Premultiplying,
    BlurringX { round: usize, distance: usize },
    BlurringY { round: usize, distance: usize },
    Unpremultiplying,
}

pub trait Verboser {
    fn verbose(&mut self, message: Message);
}

pub struct Silent;

impl Verboser for Silent {
    fn verbose(&mut self, _: Message) {}
}

/// Forwards every message to the `log` facade at debug level.
pub struct Logger;

impl Verboser for Logger {
    fn verbose(&mut self, message: Message) {
        match message {
            Message::Premultiplying => debug!("BoxBlur: premultiplying alpha"),
            Message::BlurringX { round, distance } => {
                debug!("BoxBlur: round {} horizontal pass distance={}", round, distance)
            }
            Message::BlurringY { round, distance } => {
                debug!("BoxBlur: round {} vertical pass distance={}", round, distance)
            }
            Message::Unpremultiplying => debug!("BoxBlur: restoring straight alpha"),
        }
    }
}

impl Verboser for Vec<Message> {
    fn verbose(&mut self, message: Message) {
        self.push(message);
    }
}
