/// Color grade for a verification score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    /// >= 80
    Good,
    /// 60..=79
    Caution,
    /// < 60
    Concern,
}

impl ScoreGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreGrade::Good
        } else if score >= 60.0 {
            ScoreGrade::Caution
        } else {
            ScoreGrade::Concern
        }
    }

    pub fn label_fr(&self) -> &'static str {
        match self {
            ScoreGrade::Good => "bon",
            ScoreGrade::Caution => "vigilance",
            ScoreGrade::Concern => "préoccupant",
        }
    }
}

/// Display label for the anti-spoofing liveness check.
pub fn liveness_label(detected: bool) -> &'static str {
    if detected {
        "Détectée"
    } else {
        "Non détectée"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(ScoreGrade::from_score(100.0), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(85.0), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(80.0), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(79.9), ScoreGrade::Caution);
        assert_eq!(ScoreGrade::from_score(60.0), ScoreGrade::Caution);
        assert_eq!(ScoreGrade::from_score(59.9), ScoreGrade::Concern);
        assert_eq!(ScoreGrade::from_score(55.0), ScoreGrade::Concern);
        assert_eq!(ScoreGrade::from_score(0.0), ScoreGrade::Concern);
    }

    #[test]
    fn test_liveness_labels() {
        assert_eq!(liveness_label(true), "Détectée");
        assert_eq!(liveness_label(false), "Non détectée");
    }
}
