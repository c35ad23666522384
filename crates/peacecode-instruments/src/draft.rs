use peacecode_core::models::response_set::ResponseSet;

use crate::Instrument;
use crate::error::ScreeningError;

/// Where an in-progress assessment stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    NotStarted,
    InProgress { answered: usize, total: usize },
    Complete,
}

/// Answers being collected one item at a time.
///
/// Only a complete draft can be turned into a [`ResponseSet`], and doing so
/// consumes the draft. Retaking an instrument means starting a new draft.
pub struct ResponseDraft<'a> {
    instrument: &'a dyn Instrument,
    answers: Vec<Option<usize>>,
    cursor: usize,
}

impl<'a> ResponseDraft<'a> {
    pub fn new(instrument: &'a dyn Instrument) -> Self {
        Self {
            instrument,
            answers: vec![None; instrument.item_count()],
            cursor: 0,
        }
    }

    pub fn instrument(&self) -> &'a dyn Instrument {
        self.instrument
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn state(&self) -> DraftState {
        let answered = self.answered();
        let total = self.answers.len();
        match answered {
            0 => DraftState::NotStarted,
            n if n == total => DraftState::Complete,
            n => DraftState::InProgress { answered: n, total },
        }
    }

    /// 0-based index of the item currently shown.
    pub fn current(&self) -> usize {
        self.cursor
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.answers.len()
    }

    /// Selected option for an item, if answered.
    pub fn selection(&self, item: usize) -> Option<usize> {
        self.answers.get(item).copied().flatten()
    }

    /// Record (or change) the answer to the current item.
    pub fn answer(&mut self, option: usize) -> Result<(), ScreeningError> {
        self.answer_item(self.cursor, option)
    }

    /// Record (or change) the answer to any item.
    pub fn answer_item(&mut self, item: usize, option: usize) -> Result<(), ScreeningError> {
        let question = self
            .instrument
            .questions()
            .get(item)
            .ok_or(ScreeningError::NoSuchItem {
                instrument: self.instrument.id(),
                item,
            })?;
        if question.option(option).is_none() {
            return Err(ScreeningError::InvalidOptionIndex {
                instrument: self.instrument.id(),
                item: question.number,
                index: option,
                options: question.options.len(),
            });
        }
        self.answers[item] = Some(option);
        Ok(())
    }

    /// Move to the next item. Stays put on an unanswered item or the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() || self.selection(self.cursor).is_none() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Hand over the completed answers for scoring.
    pub fn finish(self) -> Result<ResponseSet, ScreeningError> {
        let total = self.answers.len();
        let selections: Option<Vec<usize>> = self.answers.iter().copied().collect();
        match selections {
            Some(selections) => Ok(ResponseSet::new(self.instrument.id(), selections)),
            None => Err(ScreeningError::Incomplete {
                answered: self.answered(),
                total,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::gad7::Gad7;

    #[test]
    fn walks_through_states() {
        let mut draft = ResponseDraft::new(&Gad7);
        assert_eq!(draft.state(), DraftState::NotStarted);

        draft.answer(1).unwrap();
        assert_eq!(
            draft.state(),
            DraftState::InProgress {
                answered: 1,
                total: 7
            }
        );

        for _ in 1..7 {
            assert!(draft.advance());
            draft.answer(2).unwrap();
        }
        assert!(draft.is_last());
        assert!(!draft.advance());
        assert_eq!(draft.state(), DraftState::Complete);

        let set = draft.finish().unwrap();
        assert_eq!(set.selections, vec![1, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn cannot_advance_past_unanswered_item() {
        let mut draft = ResponseDraft::new(&Gad7);
        assert!(!draft.advance());
        assert_eq!(draft.current(), 0);
        assert!(!draft.back());
    }

    #[test]
    fn back_keeps_previous_answers() {
        let mut draft = ResponseDraft::new(&Gad7);
        draft.answer(3).unwrap();
        draft.advance();
        draft.answer(0).unwrap();
        assert!(draft.back());
        assert_eq!(draft.current(), 0);
        assert_eq!(draft.selection(0), Some(3));
        draft.answer(1).unwrap();
        assert_eq!(draft.selection(0), Some(1));
        assert_eq!(draft.answered(), 2);
    }

    #[test]
    fn finish_rejects_incomplete_draft() {
        let mut draft = ResponseDraft::new(&Gad7);
        draft.answer_item(0, 0).unwrap();
        draft.answer_item(6, 3).unwrap();
        let err = draft.finish().unwrap_err();
        assert_eq!(
            err,
            ScreeningError::Incomplete {
                answered: 2,
                total: 7
            }
        );
    }

    #[test]
    fn rejects_out_of_range_option() {
        let mut draft = ResponseDraft::new(&Gad7);
        let err = draft.answer(4).unwrap_err();
        assert!(matches!(
            err,
            ScreeningError::InvalidOptionIndex {
                item: 1,
                index: 4,
                options: 4,
                ..
            }
        ));
        assert_eq!(draft.state(), DraftState::NotStarted);
        assert!(matches!(
            draft.answer_item(7, 0),
            Err(ScreeningError::NoSuchItem { item: 7, .. })
        ));
    }
}
