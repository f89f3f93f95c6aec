//! Role Classifier — maps resume text to one of a fixed set of role labels.
//!
//! `AppState` holds an `Arc<dyn RoleClassifier>` built once in `main`. The
//! default backend is a multinomial logistic regression over TF-IDF features,
//! trained on three keyword strings. Every input receives one of the trained
//! labels; there is no "unknown" output.

use super::tfidf::{StopWords, TfidfVectorizer, VectorizerError};

/// Keyword bag per role used to train the default classifier.
const TRAINING_SET: &[(&str, &str)] = &[
    ("python tensorflow deep learning nlp", "AI Engineer"),
    ("react html css javascript", "Frontend Developer"),
    ("aws docker kubernetes ci cd", "DevOps Engineer"),
];

/// Inverse regularization strength.
const C: f64 = 1.0;
const LEARNING_RATE: f64 = 0.1;
const ITERATIONS: usize = 5_000;
/// Scores closer than this to the maximum count as a tie.
const TIE_EPSILON: f64 = 1e-9;

pub trait RoleClassifier: Send + Sync {
    fn classify(&self, text: &str) -> String;

    /// Labels this classifier can emit, in tie-break order.
    fn labels(&self) -> &[String];
}

pub struct LogisticRoleClassifier {
    vectorizer: TfidfVectorizer,
    /// Sorted; ties resolve to the earliest label.
    labels: Vec<String>,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LogisticRoleClassifier {
    pub fn train_default() -> Result<Self, VectorizerError> {
        Self::train(TRAINING_SET)
    }

    /// Fits the vectorizer (no stop words) and the regression on `examples`.
    pub fn train(examples: &[(&str, &str)]) -> Result<Self, VectorizerError> {
        let documents: Vec<&str> = examples.iter().map(|(text, _)| *text).collect();
        let vectorizer = TfidfVectorizer::fit(&documents, StopWords::None)?;

        let mut labels: Vec<String> = examples.iter().map(|(_, l)| l.to_string()).collect();
        labels.sort();
        labels.dedup();

        let rows: Vec<Vec<f64>> = documents.iter().map(|d| vectorizer.transform(d)).collect();
        let targets: Vec<usize> = examples
            .iter()
            .filter_map(|(_, label)| labels.iter().position(|l| l == label))
            .collect();

        let (weights, intercepts) = fit_multinomial(&rows, &targets, labels.len());

        Ok(Self {
            vectorizer,
            labels,
            weights,
            intercepts,
        })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }

    fn scores(&self, row: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(w, b)| dot(w, row) + b)
            .collect()
    }
}

impl RoleClassifier for LogisticRoleClassifier {
    fn classify(&self, text: &str) -> String {
        let scores = self.scores(&self.vectorizer.transform(text));
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let index = scores
            .iter()
            .position(|s| best - s <= TIE_EPSILON)
            .unwrap_or(0);
        self.labels[index].clone()
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Full-batch gradient descent on summed cross-entropy plus `||W||² / 2C`.
/// Intercepts are not penalized. Starts from zero, so training is deterministic.
fn fit_multinomial(
    rows: &[Vec<f64>],
    targets: &[usize],
    n_classes: usize,
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let n_features = rows.first().map_or(0, Vec::len);
    let mut weights = vec![vec![0.0; n_features]; n_classes];
    let mut intercepts = vec![0.0; n_classes];

    for _ in 0..ITERATIONS {
        let mut grad_w: Vec<Vec<f64>> = weights
            .iter()
            .map(|w| w.iter().map(|x| x / C).collect())
            .collect();
        let mut grad_b = vec![0.0; n_classes];

        for (row, &target) in rows.iter().zip(targets) {
            let logits: Vec<f64> = weights
                .iter()
                .zip(&intercepts)
                .map(|(w, b)| dot(w, row) + b)
                .collect();
            let probs = softmax(&logits);
            for class in 0..n_classes {
                let residual = probs[class] - if class == target { 1.0 } else { 0.0 };
                grad_b[class] += residual;
                for (g, x) in grad_w[class].iter_mut().zip(row) {
                    *g += residual * x;
                }
            }
        }

        for class in 0..n_classes {
            intercepts[class] -= LEARNING_RATE * grad_b[class];
            for (w, g) in weights[class].iter_mut().zip(&grad_w[class]) {
                *w -= LEARNING_RATE * g;
            }
        }
    }

    (weights, intercepts)
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
