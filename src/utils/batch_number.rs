use chrono::{Local, NaiveDate};
use std::sync::Mutex;

struct DailySequence {
    date: Option<NaiveDate>,
    sequence: u32,
}

/// Issues batch identifiers of the form `BATCH_YYYYMMDD_NNN`. The sequence
/// restarts at 1 on the first call seen for a new calendar day.
///
/// State lives in this process only: it is lost on restart and two
/// processes will hand out the same numbers.
// TODO: derive the next sequence from the highest batch number stored for
// the day once batches are persisted.
pub struct BatchNumberGenerator {
    state: Mutex<DailySequence>,
}

impl Default for BatchNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchNumberGenerator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DailySequence {
                date: None,
                sequence: 0,
            }),
        }
    }

    pub fn generate(&self) -> String {
        self.generate_on(Local::now().date_naive())
    }

    pub fn generate_on(&self, date: NaiveDate) -> String {
        let sequence = {
            let mut state = self
                .state
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            if state.date != Some(date) {
                state.date = Some(date);
                state.sequence = 0;
            }
            state.sequence += 1;
            state.sequence
        };

        format!("BATCH_{}_{:03}", date.format("%Y%m%d"), sequence)
    }
}
