//! Value scales used to size nodes.

/// Square-root scale from a numeric domain onto a range, clamped to the range.
///
/// Area grows linearly with the input, which keeps high-degree nodes from
/// dominating the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl SqrtScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	/// Scale over degrees `1..=max_degree`.
	pub fn for_degrees(max_degree: u32, range: (f64, f64)) -> Self {
		Self::new((1.0, max_degree.max(1) as f64), range)
	}

	pub fn apply(&self, value: f64) -> f64 {
		let (d0, d1) = (self.domain.0.max(0.0).sqrt(), self.domain.1.max(0.0).sqrt());
		let (r0, r1) = self.range;
		if (d1 - d0).abs() < f64::EPSILON {
			return r0;
		}
		let t = ((value.max(0.0).sqrt() - d0) / (d1 - d0)).clamp(0.0, 1.0);
		r0 + (r1 - r0) * t
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_domain_ends_to_range_ends() {
		let scale = SqrtScale::for_degrees(16, (3.0, 12.0));
		assert_eq!(scale.apply(1.0), 3.0);
		assert_eq!(scale.apply(16.0), 12.0);
		assert!((scale.apply(4.0) - 6.0).abs() < 1e-9);
	}

	#[test]
	fn clamps_outside_domain() {
		let scale = SqrtScale::for_degrees(9, (3.0, 12.0));
		assert_eq!(scale.apply(0.0), 3.0);
		assert_eq!(scale.apply(100.0), 12.0);
	}

	#[test]
	fn degenerate_domain_uses_range_start() {
		assert_eq!(SqrtScale::for_degrees(1, (3.0, 12.0)).apply(1.0), 3.0);
		assert_eq!(SqrtScale::for_degrees(0, (3.0, 12.0)).apply(5.0), 3.0);
	}
}
