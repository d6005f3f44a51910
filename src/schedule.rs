//! Avance automático opcional tras una respuesta correcta.
//!
//! El temporizador guarda el `epoch` de la sesión en el que se programó: si
//! la pregunta cambia o la sesión se reinicia antes de que venza, se descarta
//! sin disparar. El tiempo lo pone quien llama (segundos, p. ej. `egui::InputState::time`).

/// Espera máxima admitida: una hora.
pub const MAX_DELAY_SECS: f64 = 3600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Scheduled {
    epoch: u64,
    due_at: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AutoAdvanceTimer {
    delay: f64,
    pending: Option<Scheduled>,
}

impl AutoAdvanceTimer {
    /// `delay_secs` se acota a `0..=MAX_DELAY_SECS`; NaN cuenta como 0.
    pub fn new(delay_secs: f64) -> Self {
        let delay = if delay_secs.is_nan() {
            0.0
        } else {
            delay_secs.clamp(0.0, MAX_DELAY_SECS)
        };
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Programa el avance; sustituye a cualquier avance pendiente.
    pub fn schedule(&mut self, epoch: u64, now: f64) {
        self.pending = Some(Scheduled {
            epoch,
            due_at: now + self.delay,
        });
        log::debug!("avance automático programado en {:.1}s", self.delay);
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("avance automático cancelado");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Segundos que faltan, o `None` si no hay nada programado.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.pending.map(|p| (p.due_at - now).max(0.0))
    }

    /// Devuelve `true` una sola vez, cuando vence un avance del `epoch` actual.
    pub fn poll(&mut self, epoch: u64, now: f64) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.epoch != epoch {
            log::debug!("avance automático obsoleto descartado");
            self.pending = None;
            return false;
        }
        if now < pending.due_at {
            return false;
        }
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut t = AutoAdvanceTimer::new(1.5);
        t.schedule(3, 10.0);
        assert!(!t.poll(3, 11.0));
        assert_eq!(t.remaining(11.0), Some(0.5));
        assert!(t.poll(3, 11.5));
        assert!(!t.poll(3, 12.0));
        assert!(!t.is_pending());
    }

    #[test]
    fn stale_epoch_is_discarded() {
        let mut t = AutoAdvanceTimer::new(1.0);
        t.schedule(3, 0.0);
        assert!(!t.poll(4, 5.0));
        assert!(!t.is_pending());
    }

    #[test]
    fn cancel_drops_pending_advance() {
        let mut t = AutoAdvanceTimer::new(1.0);
        t.schedule(0, 0.0);
        t.cancel();
        assert!(!t.poll(0, 5.0));
        assert_eq!(t.remaining(5.0), None);
    }

    #[test]
    fn out_of_range_delays_are_clamped() {
        assert_eq!(AutoAdvanceTimer::new(-2.0).delay(), 0.0);
        assert_eq!(AutoAdvanceTimer::new(f64::NAN).delay(), 0.0);
        assert_eq!(AutoAdvanceTimer::new(1.0e30).delay(), MAX_DELAY_SECS);
        assert_eq!(AutoAdvanceTimer::new(f64::INFINITY).delay(), MAX_DELAY_SECS);
    }
}
