// src/timer.rs

use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Expired,
    Cancelled,
}

/// Resultado de un tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Sigue corriendo con estos segundos restantes.
    Running(i64),
    /// Acaba de llegar a cero. Solo se devuelve una vez por instancia.
    Expired,
    /// Ya expirado o cancelado: el tick no hace nada.
    Stopped,
}

/// Cuenta atrás de una pregunta. Se alimenta desde el bucle de frames.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: i64,
    carry: Duration,
    phase: Phase,
}

impl Countdown {
    pub fn new(duration_secs: i64) -> Self {
        Self {
            remaining: duration_secs.max(0),
            carry: Duration::ZERO,
            phase: Phase::Running,
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Expired
    }

    /// Detiene la cuenta sin disparar la expiración.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Cancelled;
        }
    }

    /// Avanza exactamente un segundo.
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Stopped;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.phase = Phase::Expired;
            return Tick::Expired;
        }
        self.remaining -= 1;
        Tick::Running(self.remaining)
    }

    /// Acumula tiempo real y emite un tick por cada segundo completo.
    /// Devuelve true si la cuenta ha expirado durante esta llamada.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.carry += elapsed;
        while self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            if self.tick() == Tick::Expired {
                self.carry = Duration::ZERO;
                return true;
            }
        }
        false
    }

    pub fn display(&self) -> String {
        format_mm_ss(self.remaining)
    }
}

/// Formatea segundos como MM:SS. Los negativos se muestran como 00:00.
pub fn format_mm_ss(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
