// Domain layer: the submission, the notification card and the ports the relay talks through.

pub mod model;
pub mod ports;
