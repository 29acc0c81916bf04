//! Binding to the pre-trained crop classifier.

use tract_onnx::prelude::*;

/// One-shot classification over a six-feature sample.
///
/// A trait seam so the request path can be exercised with a stub; the
/// production implementation wraps a tract-onnx plan.
pub trait CropClassifier {
    fn predict(&self, features: &[f32; 6]) -> anyhow::Result<i64>;
}

/// ONNX-backed classifier loaded once at process start.
pub struct CropModel {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
}

impl CropModel {
    pub fn load<P: AsRef<std::path::Path>>(model_path: P) -> TractResult<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 6)))?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { plan })
    }
}

impl CropClassifier for CropModel {
    fn predict(&self, features: &[f32; 6]) -> anyhow::Result<i64> {
        let input = Tensor::from_shape(&[1, 6], features)?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        // First output of an sklearn-exported classifier is the i64 label.
        let label = *outputs[0]
            .to_array_view::<i64>()?
            .iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("model produced an empty label tensor"))?;

        Ok(label)
    }
}
