use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::simple::SimpleArray;

/// **Requires crate feature `"approx"`**
impl<A, B> AbsDiffEq<SimpleArray<B>> for SimpleArray<A>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &SimpleArray<B>, epsilon: A::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<A, B> RelativeEq<SimpleArray<B>> for SimpleArray<A>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &SimpleArray<B>,
        epsilon: A::Epsilon,
        max_relative: A::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<A, B> UlpsEq<SimpleArray<B>> for SimpleArray<A>
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &SimpleArray<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}
