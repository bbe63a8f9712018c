use std::rc::Rc;
use yew::prelude::*;

/// Years the story can display, oldest first.
pub const YEARS: [i32; 9] = [2017, 2018, 2019, 2020, 2021, 2022, 2023, 2024, 2025];

/// The year that shows the birthday overlay.
pub const FINAL_YEAR: i32 = YEARS[YEARS.len() - 1];

pub static YEAR_SEQUENCE: &[i32] = &YEARS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeline {
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineAction {
    Previous,
    Next,
    GoToYear(i32),
    /// Raw value reported by the year slider.
    SliderValue(f64),
}

impl Timeline {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn displayed_year(&self) -> i32 {
        YEARS[self.index]
    }

    pub fn is_final_year(&self) -> bool {
        self.displayed_year() == FINAL_YEAR
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == YEARS.len() - 1
    }

    /// Steps back one year. Returns false at the first year.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Steps forward one year. Returns false at the last year.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Jumps to `year`. Years outside the sequence leave the timeline untouched.
    pub fn go_to_year(&mut self, year: i32) -> bool {
        match YEARS.iter().position(|&y| y == year) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    pub fn set_from_slider_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let rounded = value.round();
        if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
            return false;
        }
        self.go_to_year(rounded as i32)
    }

    pub fn apply(&mut self, action: &TimelineAction) -> bool {
        match *action {
            TimelineAction::Previous => self.previous(),
            TimelineAction::Next => self.next(),
            TimelineAction::GoToYear(year) => self.go_to_year(year),
            TimelineAction::SliderValue(value) => self.set_from_slider_value(value),
        }
    }
}

impl Reducible for Timeline {
    type Action = TimelineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(&action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
