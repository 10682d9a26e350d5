//! Daily request quota for the external lookup, reset on UTC date change.

use std::sync::Mutex;

use chrono::{NaiveDate, Utc};

use byeai_core::models::QuotaStatus;

#[derive(Debug)]
struct QuotaState {
    used: u32,
    day: NaiveDate,
}

/// Counts lookup requests per UTC day against a fixed daily limit.
#[derive(Debug)]
pub struct QuotaTracker {
    daily_quota: u32,
    state: Mutex<QuotaState>,
}

impl QuotaTracker {
    pub fn new(daily_quota: u32) -> Self {
        Self::starting_on(daily_quota, Utc::now().date_naive())
    }

    fn starting_on(daily_quota: u32, day: NaiveDate) -> Self {
        Self {
            daily_quota,
            state: Mutex::new(QuotaState { used: 0, day }),
        }
    }

    /// Take one slot from today's quota if any is left. The check and the
    /// increment happen under one lock, so concurrent callers never
    /// overshoot the limit.
    pub fn try_reserve(&self) -> bool {
        self.try_reserve_on(Utc::now().date_naive())
    }

    /// Hand back a slot for a request the service never answered.
    pub fn release(&self) {
        self.release_on(Utc::now().date_naive());
    }

    /// Usage for the current day.
    pub fn status(&self) -> QuotaStatus {
        self.status_on(Utc::now().date_naive())
    }

    pub fn daily_quota(&self) -> u32 {
        self.daily_quota
    }

    fn with_state<T>(&self, today: NaiveDate, f: impl FnOnce(&mut QuotaState) -> T) -> T {
        // A poisoned lock only means another thread panicked mid-increment;
        // the counter is still usable.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if today > state.day {
            state.used = 0;
            state.day = today;
        }
        f(&mut state)
    }

    fn try_reserve_on(&self, today: NaiveDate) -> bool {
        let limit = self.daily_quota;
        let reserved = self.with_state(today, |s| {
            if s.used >= limit {
                return None;
            }
            s.used += 1;
            Some(s.used)
        });
        match reserved {
            Some(used) => {
                tracing::debug!(used, daily_quota = limit, "lookup slot reserved");
                true
            }
            None => false,
        }
    }

    fn release_on(&self, today: NaiveDate) {
        self.with_state(today, |s| s.used = s.used.saturating_sub(1));
    }

    fn status_on(&self, today: NaiveDate) -> QuotaStatus {
        let limit = self.daily_quota;
        self.with_state(today, |s| QuotaStatus {
            requests_used: s.used,
            requests_remaining: limit.saturating_sub(s.used),
            quota_percentage: if limit == 0 {
                100.0
            } else {
                f64::from(s.used) / f64::from(limit) * 100.0
            },
        })
    }
}
