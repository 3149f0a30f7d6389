//! Resting place for [Instruments] used by the [StructureIdentifier](crate::identifier::StructureIdentifier)


/// Honors the *Zero-Cost Instrumentation Pattern* for the [StructureIdentifier](crate::identifier::StructureIdentifier):\
/// Designed to be used as a const generic parameter for Structs,
/// causes the conditional instrumentation code in client structs to
/// be selectively compiled -- see the implemented *const methods* for
/// documentation of each available instrument.
///
/// Note: Using this enum directly in generics --
/// as in `struct S<const INSTUMENTS: Instruments = { Instruments::Uninstrumented }> {...}`
/// -- is not possible yet: *"adt const params is experimental [E0658]"*,
/// so we'll use it as `struct S<const INSTRUMENTS: usize = 0>` instead, and use [Instruments::from(INSTRUMENTS)]
/// in the instrumentable implementations & `let s = S::<{Instruments::<YourOption>.into()}>::new();` in clients.
#[derive(Debug,Clone,Copy,PartialEq)]
#[repr(usize)]
pub enum Instruments {

    /// No conditional instrumentation code will be included -- bringing in the fastest
    /// possible execution speeds at the expense of lowest operational control
    Uninstrumented             = 0,

    /// Counters are updated, but no summary will be logged in the *INFO* level
    MetricsWithoutDiagnostics  = Self::METRICS,
    MetricsWithDiagnostics     = Self::METRICS | Self::METRICS_DIAGNOSTICS,
    OperationsTracing          = Self::TRACING,
    MetricsAndTracing          = Self::METRICS | Self::METRICS_DIAGNOSTICS | Self::TRACING,
}

impl Instruments {

    /// keeps the [IdentifierMetrics](crate::identifier::IdentifierMetrics) counters up to date
    const METRICS:             usize = 1;
    /// outputs, in the *INFO* level, a summary of each identification -- including its elapsed time
    const METRICS_DIAGNOSTICS: usize = 2;
    /// outputs every broadcast operation & every tester falsification in the *TRACE* level
    const TRACING:             usize = 4;

    /// To be used in if conditions, returns the enum variant
    /// that corresponds to the given const generic numeric value as described in [Self]
    pub const fn from(instruments: usize) -> Self {
        match instruments {
            0                                                  => Self::Uninstrumented,
            x if x == Self::MetricsWithoutDiagnostics as usize => Self::MetricsWithoutDiagnostics,
            x if x == Self::MetricsWithDiagnostics as usize    => Self::MetricsWithDiagnostics,
            x if x == Self::OperationsTracing as usize         => Self::OperationsTracing,
            x if x == Self::MetricsAndTracing as usize         => Self::MetricsAndTracing,
            _                                                  => Self::Uninstrumented,
        }
    }

    /// designed to be used by clients of the implementor structs, returns the number to be used as a
    /// const generic numeric value (when instantiating the implementor struct) that corresponds
    /// to the given enum variant
    pub const fn into(self) -> usize {
        match self {
            Self::Uninstrumented            => 0,
            Self::MetricsWithoutDiagnostics => Self::METRICS,
            Self::MetricsWithDiagnostics    => Self::METRICS | Self::METRICS_DIAGNOSTICS,
            Self::OperationsTracing         => Self::TRACING,
            Self::MetricsAndTracing         => Self::METRICS | Self::METRICS_DIAGNOSTICS | Self::TRACING,
        }
    }

    /// returns whether the identification counters should be kept
    pub const fn metrics(self) -> bool {
        self.into() & Self::METRICS > 0
    }

    /// returns whether a summary of each identification should be logged in the `INFO` level
    pub const fn metrics_diagnostics(self) -> bool {
        self.into() & Self::METRICS_DIAGNOSTICS > 0
    }

    /// returns whether every operation should be logged in the `TRACE` level
    pub const fn tracing(self) -> bool {
        self.into() & Self::TRACING > 0
    }

}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for [instruments](super) module

    use super::*;


    #[cfg_attr(not(doc),test)]
    fn const_generic_round_trip() {
        for variant in [Instruments::Uninstrumented, Instruments::MetricsWithoutDiagnostics, Instruments::MetricsWithDiagnostics,
                        Instruments::OperationsTracing, Instruments::MetricsAndTracing] {
            assert_eq!(Instruments::from(variant.into()), variant, "`from()` didn't revert `into()` for {:?}", variant);
        }
        assert_eq!(Instruments::from(1024), Instruments::Uninstrumented, "Unknown values should fall back to no instrumentation");
    }

    #[cfg_attr(not(doc),test)]
    fn flags() {
        assert!(!Instruments::Uninstrumented.metrics());
        assert!(!Instruments::Uninstrumented.tracing());
        assert!( Instruments::MetricsWithoutDiagnostics.metrics());
        assert!(!Instruments::MetricsWithoutDiagnostics.metrics_diagnostics());
        assert!( Instruments::MetricsWithDiagnostics.metrics_diagnostics());
        assert!( Instruments::OperationsTracing.tracing());
        assert!(!Instruments::OperationsTracing.metrics());
        assert!( Instruments::MetricsAndTracing.metrics() && Instruments::MetricsAndTracing.metrics_diagnostics() && Instruments::MetricsAndTracing.tracing());
    }

}
