/// 시판 챔버(관) 규격의 외경/내경 쌍 [m].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiameterOption {
    pub outer_m: f64,
    pub inner_m: f64,
}

// 0.133 외경은 두께가 다른 두 제품이 있다.
const OUTER_DIAMETERS_M: [f64; 12] = [
    0.1, 0.11, 0.12, 0.133, 0.133, 0.15, 0.18, 0.2, 0.25, 0.3, 0.4, 0.5,
];
const INNER_DIAMETERS_M: [f64; 12] = [
    0.094, 0.1, 0.11, 0.123, 0.127, 0.144, 0.172, 0.194, 0.24, 0.29, 0.39, 0.492,
];

/// 규격 직경 목록을 외경 오름차순으로 반환한다.
pub fn diameter_options() -> Vec<DiameterOption> {
    OUTER_DIAMETERS_M
        .iter()
        .zip(INNER_DIAMETERS_M.iter())
        .map(|(&outer_m, &inner_m)| DiameterOption { outer_m, inner_m })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_never_exceeds_outer() {
        for opt in diameter_options() {
            assert!(opt.inner_m < opt.outer_m, "{opt:?}");
        }
    }
}
