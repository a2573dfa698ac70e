//! MOSFET device model.
//!
//! Uses the long-channel square-law model without leakage. With
//! overdrive `Vgse = (Vg - Vs) - Vt` and `Vds = Vd - Vs`:
//!
//! ```text
//!   Vgse < 0          cutoff      Ids = 0
//!   0 <= Vgse < Vds   saturation  Ids = (k*s/2) * Vgse^2
//!   Vds <= Vgse       linear      Ids = k*s * (Vgse - Vds/2) * Vds
//! ```
//!
//! The equations above assume an N-channel device with `Vs <= Vd`. A device
//! with `Vd < Vs` is evaluated with the two terminals swapped and the current
//! negated. A P-channel device is evaluated as an N-channel device on the
//! negated voltages, threshold, and mobility, and its current negated.
//!
//! Ids only depends on the terminal voltages through `Vgse` and `Vds`, so the
//! three partials always sum to zero.
//!
//! Any interval-valued terminal switches the device to interval mode, which
//! returns a sound enclosure instead of a point value.

use std::fmt;
use std::sync::Arc;

use crate::circuit::NodeId;
use crate::error::{MosboundError, Result};
use crate::interval::{reduce_pair, reduce_value, Extremum, Interval, Value};

/// Channel polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Nfet,
    Pfet,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Nfet => write!(f, "nfet"),
            Polarity::Pfet => write!(f, "pfet"),
        }
    }
}

/// Parameters shared by every device of one type.
#[derive(Debug, Clone, PartialEq)]
pub struct MosfetModel {
    pub polarity: Polarity,
    /// Threshold voltage
    pub vt: f64,
    /// Carrier mobility
    pub k: Value,
    /// Shape factor (W/L)
    pub s: Value,
}

impl MosfetModel {
    /// Create a model, rejecting non-finite parameters.
    pub fn new(
        polarity: Polarity,
        vt: f64,
        k: impl Into<Value>,
        s: impl Into<Value>,
    ) -> Result<Self> {
        let k = k.into();
        let s = s.into();

        if !vt.is_finite() {
            return Err(MosboundError::invalid_parameter("vt", "threshold must be finite"));
        }
        for (name, v) in [("k", k), ("s", s)] {
            if !v.fix().is_bounded() {
                return Err(MosboundError::invalid_parameter(name, "must be finite"));
            }
        }

        Ok(Self {
            polarity,
            vt,
            k,
            s,
        })
    }

    /// N-channel model.
    pub fn nfet(vt: f64, k: impl Into<Value>, s: impl Into<Value>) -> Result<Self> {
        Self::new(Polarity::Nfet, vt, k, s)
    }

    /// P-channel model.
    pub fn pfet(vt: f64, k: impl Into<Value>, s: impl Into<Value>) -> Result<Self> {
        Self::new(Polarity::Pfet, vt, k, s)
    }

    /// Threshold and `k*s` as seen by the N-channel equations.
    fn channel(&self) -> Channel {
        match self.polarity {
            Polarity::Nfet => Channel {
                vt: self.vt,
                ks: self.k * self.s,
            },
            Polarity::Pfet => Channel {
                vt: -self.vt,
                ks: (-self.k) * self.s,
            },
        }
    }
}

impl fmt::Display for MosfetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MosfetModel({}, {}, {}, {})",
            self.polarity, self.vt, self.k, self.s
        )
    }
}

/// Polarity-folded parameters for the N-channel equations.
#[derive(Debug, Clone, Copy)]
struct Channel {
    vt: f64,
    ks: Value,
}

/// A MOSFET instance.
#[derive(Debug, Clone)]
pub struct Mosfet {
    pub nodes: [NodeId; 3], // [source, gate, drain]
    pub model: Arc<MosfetModel>,
}

impl Mosfet {
    /// Create a new MOSFET.
    pub fn new(source: NodeId, gate: NodeId, drain: NodeId, model: Arc<MosfetModel>) -> Self {
        Self {
            nodes: [source, gate, drain],
            model,
        }
    }

    /// Get the source node.
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    /// Get the gate node.
    pub fn gate(&self) -> NodeId {
        self.nodes[1]
    }

    /// Get the drain node.
    pub fn drain(&self) -> NodeId {
        self.nodes[2]
    }

    /// Get the shared model.
    pub fn model(&self) -> &MosfetModel {
        &self.model
    }

    /// Read `[Vs, Vg, Vd]` from a voltage assignment.
    pub fn terminal_voltages(&self, voltages: &[Value]) -> Result<[Value; 3]> {
        let read = |node: NodeId| {
            voltages
                .get(node.index())
                .copied()
                .ok_or_else(|| MosboundError::missing_node(node.index(), voltages.len()))
        };
        Ok([read(self.source())?, read(self.gate())?, read(self.drain())?])
    }

    /// Drain-to-source current for the given voltage assignment.
    pub fn current(&self, voltages: &[Value]) -> Result<Value> {
        let [vs, vg, vd] = self.terminal_voltages(voltages)?;
        Ok(self.current_at(vs, vg, vd))
    }

    /// Partials of the current with respect to `[Vs, Vg, Vd]`.
    pub fn gradient(&self, voltages: &[Value]) -> Result<[Value; 3]> {
        let [vs, vg, vd] = self.terminal_voltages(voltages)?;
        Ok(self.gradient_at(vs, vg, vd))
    }

    /// Current at explicit terminal voltages.
    ///
    /// In interval mode the bound comes from corner evaluations. Ids is
    /// decreasing in Vs and increasing in Vd everywhere, so the extremes sit
    /// at `(max Vs, min Vd)` and `(min Vs, max Vd)`. Along Vg it is
    /// increasing while `Vs <= Vd` and decreasing once the channel reverses,
    /// so both gate endpoints are tried at each of those corners. With the
    /// box in forward orientation this reduces to the two corners
    /// `(max Vs, min Vg, min Vd)` and `(min Vs, max Vg, max Vd)`.
    pub fn current_at(&self, vs: Value, vg: Value, vd: Value) -> Value {
        let polarity = self.model.polarity;
        let ch = self.model.channel();
        match (vs, vg, vd) {
            (Value::Scalar(vs), Value::Scalar(vg), Value::Scalar(vd)) => {
                polar_current(polarity, vs, vg, vd, ch)
            }
            _ => {
                let corner = |[s, g, d]: [Extremum; 3]| {
                    polar_current(
                        polarity,
                        reduce_value(s, vs),
                        reduce_value(g, vg),
                        reduce_value(d, vd),
                        ch,
                    )
                    .fix()
                };
                let [first, rest @ ..] = CURRENT_CORNERS;
                let bound = rest
                    .into_iter()
                    .map(&corner)
                    .fold(corner(first), Interval::union);
                Value::Interval(bound)
            }
        }
    }

    /// Gradient at explicit terminal voltages.
    pub fn gradient_at(&self, vs: Value, vg: Value, vd: Value) -> [Value; 3] {
        let ch = self.model.channel();
        // d(-Ids)/d(-V) = dIds/dV, so the P-channel gradient is the
        // N-channel gradient at the negated point with no sign change.
        match self.model.polarity {
            Polarity::Nfet => nfet_gradient(vs, vg, vd, ch),
            Polarity::Pfet => nfet_gradient(-vs, -vg, -vd, ch),
        }
    }
}

/// `[source, gate, drain]` reductions for interval-mode current bounds.
const CURRENT_CORNERS: [[Extremum; 3]; 4] = [
    [Extremum::Max, Extremum::Min, Extremum::Min],
    [Extremum::Min, Extremum::Max, Extremum::Max],
    [Extremum::Max, Extremum::Max, Extremum::Min],
    [Extremum::Min, Extremum::Min, Extremum::Max],
];

fn polar_current(polarity: Polarity, vs: f64, vg: f64, vd: f64, ch: Channel) -> Value {
    match polarity {
        Polarity::Nfet => nfet_current(vs, vg, vd, ch),
        Polarity::Pfet => -nfet_current(-vs, -vg, -vd, ch),
    }
}

fn nfet_current(vs: f64, vg: f64, vd: f64, ch: Channel) -> Value {
    if vd < vs {
        return -nfet_current(vd, vg, vs, ch);
    }
    let vgse = (vg - vs) - ch.vt;
    let vds = vd - vs;

    if vgse < 0.0 {
        // cutoff
        Value::ZERO
    } else if vgse < vds {
        // saturation
        ch.ks * Value::Scalar(0.5 * vgse * vgse)
    } else {
        // linear
        ch.ks * Value::Scalar((vgse - vds / 2.0) * vds)
    }
}

fn nfet_gradient(vs: Value, vg: Value, vd: Value, ch: Channel) -> [Value; 3] {
    match (vs, vg, vd) {
        (Value::Scalar(vs), Value::Scalar(vg), Value::Scalar(vd)) => {
            point_nfet_gradient(vs, vg, vd, ch)
        }
        _ => interval_nfet_gradient(vs.fix(), vg.fix(), vd.fix(), ch),
    }
}

fn point_nfet_gradient(vs: f64, vg: f64, vd: f64, ch: Channel) -> [Value; 3] {
    if vd < vs {
        let [gs, gg, gd] = point_nfet_gradient(vd, vg, vs, ch);
        return [-gd, -gg, -gs];
    }
    let vgse = (vg - vs) - ch.vt;
    let vds = vd - vs;

    if vgse < 0.0 {
        [Value::ZERO; 3]
    } else if vgse < vds {
        let g = ch.ks * Value::Scalar(vgse);
        [-g, g, Value::ZERO]
    } else {
        let dg = ch.ks * Value::Scalar(vds);
        let dd = ch.ks * Value::Scalar(vgse - vds);
        [-(dg + dd), dg, dd]
    }
}

/// Gradient enclosure over a box that may straddle `Vs = Vd`.
///
/// Each orientation is bounded on the part of the box where it holds and the
/// two bounds are hulled.
fn interval_nfet_gradient(vs: Interval, vg: Interval, vd: Interval, ch: Channel) -> [Value; 3] {
    let forward = oriented_gradient(vs, vg, vd, ch);
    let reverse = oriented_gradient(vd, vg, vs, ch).map(|[gs, gg, gd]| [-gd, -gg, -gs]);

    match union_gradient(forward, reverse) {
        Some(g) => g.map(Value::Interval),
        // vs.lo > vd.hi and vd.lo > vs.hi cannot both hold
        None => unreachable!("source and drain ranges exclude each other in both orders"),
    }
}

/// Gradient enclosure restricted to `Vs <= Vd`, or `None` if that ordering
/// is impossible anywhere in the box.
///
/// Within that ordering `dIds/dVg = k*s * max(0, min(Vgse, Vds))` and
/// `dIds/dVd = k*s * max(0, Vg - Vt - Vd)`, both monotone in their
/// arguments.
fn oriented_gradient(
    vs: Interval,
    vg: Interval,
    vd: Interval,
    ch: Channel,
) -> Option<[Interval; 3]> {
    if vs.lo() > vd.hi() {
        return None;
    }
    let src = Interval::spanning(vs.lo(), vs.hi().min(vd.hi()));
    let drn = Interval::spanning(vd.lo().max(vs.lo()), vd.hi());
    let vt = Interval::point(ch.vt);
    let ks = ch.ks.fix();

    let vgse = ((vg - src) - vt).clamp_non_negative();
    let vds = (drn - src).clamp_non_negative();
    let dg_shape = Interval::spanning(vgse.lo().min(vds.lo()), vgse.hi().min(vds.hi()));
    let dd_shape = ((vg - vt) - drn).clamp_non_negative();

    let dg = ks * dg_shape;
    let dd = ks * dd_shape;
    Some([-(dg + dd), dg, dd])
}

/// Elementwise hull of two gradient enclosures; `None` is empty.
fn union_gradient(a: Option<[Interval; 3]>, b: Option<[Interval; 3]>) -> Option<[Interval; 3]> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let lo = reduce_pair(Extremum::Min, a.map(|i| i.lo()), b.map(|i| i.lo()));
            let hi = reduce_pair(Extremum::Max, a.map(|i| i.hi()), b.map(|i| i.hi()));
            Some([0, 1, 2].map(|n| Interval::spanning(lo[n], hi[n])))
        }
        (a, None) => a,
        (None, b) => b,
    }
}
