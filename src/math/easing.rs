/// Quadratic ease-out over t in [0, 1]. Fast start, smooth settle - the
/// default curve the page's tween utility applied to hover blends.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_quad_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn ease_out_quad_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_out_quad(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn ease_out_quad_leads_linear() {
        // Ease-out is above the identity for interior t
        assert!(ease_out_quad(0.25) > 0.25);
        assert!(ease_out_quad(0.5) > 0.5);
        assert!(ease_out_quad(0.75) > 0.75);
    }
}
