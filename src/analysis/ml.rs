//! Machine-learning signal detection by keyword substring matching.

use serde::{Deserialize, Serialize};

/// Framework label and the substrings that reveal it, in report order.
pub static FRAMEWORKS: &[(&str, &[&str])] = &[
    ("tensorflow", &["tensorflow", "tf", "keras"]),
    ("pytorch", &["torch", "nn.Module"]),
    ("scikit-learn", &["sklearn", "LinearRegression", "RandomForest"]),
    ("xgboost", &["xgboost", "XGBClassifier"]),
    ("pandas", &["pandas", "pd.DataFrame"]),
    ("numpy", &["numpy", "np.array"]),
];

/// Operation label and its substrings, in report order.
pub static OPERATIONS: &[(&str, &[&str])] = &[
    ("training", &["fit", "train", "optimizer", "loss", "train_test_split"]),
    ("prediction", &["predict", "inference", "evaluate", "score"]),
    (
        "preprocessing",
        &["transform", "preprocessing", "standardization", "normalize"],
    ),
    (
        "evaluation",
        &["accuracy", "precision", "recall", "f1", "roc_auc", "confusion_matrix"],
    ),
];

/// ML frameworks and operations found in a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlSignal {
    pub is_ml_code: bool,
    pub frameworks: Vec<String>,
    pub operations: Vec<String>,
}

impl MlSignal {
    fn record(list: &mut Vec<String>, label: &str) {
        if !list.iter().any(|l| l == label) {
            list.push(label.to_string());
        }
    }

    pub fn add_framework(&mut self, label: &str) {
        Self::record(&mut self.frameworks, label);
        self.is_ml_code = true;
    }

    pub fn add_operation(&mut self, label: &str) {
        Self::record(&mut self.operations, label);
        self.is_ml_code = true;
    }
}

/// Scan `content` for ML frameworks and operations.
pub fn detect_ml(content: &str) -> MlSignal {
    let mut signal = MlSignal::default();

    for (label, keywords) in FRAMEWORKS {
        if keywords.iter().any(|k| content.contains(k)) {
            signal.add_framework(label);
        }
    }
    for (label, keywords) in OPERATIONS {
        if keywords.iter().any(|k| content.contains(k)) {
            signal.add_operation(label);
        }
    }

    signal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensorflow_training() {
        let signal = detect_ml("import tensorflow as tf\nmodel.fit(x, y)");
        assert!(signal.is_ml_code);
        assert!(signal.frameworks.contains(&"tensorflow".to_string()));
        assert!(signal.operations.contains(&"training".to_string()));
    }

    #[test]
    fn test_no_signal() {
        let signal = detect_ml("print('hello')");
        assert_eq!(signal, MlSignal::default());
    }

    #[test]
    fn test_labels_are_not_duplicated() {
        let mut signal = MlSignal::default();
        signal.add_framework("numpy");
        signal.add_framework("numpy");
        assert_eq!(signal.frameworks, vec!["numpy".to_string()]);
    }
}
