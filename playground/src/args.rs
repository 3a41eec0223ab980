use clap::Parser;
use priority_queue::{QueueConfig, DEFAULT_CAPACITY, DEFAULT_SHRINK_FLOOR};
use prompt::{ElementKind, Mode};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Mode to run once: demo, test, free or playground.
    ///
    /// If unset, the mode is prompted for and the program keeps asking until told to exit
    #[arg(short, long, required = false)]
    pub mode: Option<Mode>,

    /// Element type of playground queues: int, double or string (prompted if unset)
    #[arg(short, long, required = false)]
    pub element: Option<ElementKind>,

    /// Initial capacity of playground queues
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Playground queues never shrink below this capacity
    #[arg(long, default_value_t = DEFAULT_SHRINK_FLOOR)]
    pub shrink_floor: usize,

    /// Create fixed-capacity playground queues that reject pushes once full
    #[arg(short, long)]
    pub bounded: bool,
}

impl Args {
    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig {
            initial_capacity: self.capacity,
            shrink_floor: self.shrink_floor,
            bounded: self.bounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_queue_defaults() {
        let args = Args::parse_from(["playground"]);
        assert_eq!(args.mode, None);
        assert_eq!(args.element, None);
        assert_eq!(args.queue_config(), QueueConfig::default());
    }

    #[test]
    fn flags_build_a_bounded_config() {
        let args = Args::parse_from([
            "playground",
            "--mode",
            "playground",
            "--element",
            "string",
            "--capacity",
            "4",
            "--bounded",
        ]);
        assert_eq!(args.mode, Some(Mode::Playground));
        assert_eq!(args.element, Some(ElementKind::Text));
        assert_eq!(args.queue_config(), QueueConfig::bounded(4));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["playground", "--mode", "juggle"]).is_err());
    }
}
