//! Built-in sample impressions.

/// A named impression run by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCase {
    /// Display name.
    pub name: &'static str,
    /// Impression text.
    pub impression: &'static str,
}

/// Samples covering an abnormal, a normal and a degenerative study.
pub const SAMPLE_CASES: [SampleCase; 3] = [
    SampleCase {
        name: "Chest X-ray: Pneumonia",
        impression: "Right lower lobe pneumonia. Small right pleural effusion. Heart size normal. No pneumothorax.",
    },
    SampleCase {
        name: "Brain MRI: Normal",
        impression: "No acute intracranial abnormality. No mass effect, midline shift, or abnormal enhancement. Ventricles and sulci are normal in size and configuration.",
    },
    SampleCase {
        name: "Knee X-ray: Arthritis",
        impression: "Mild degenerative changes of the medial compartment with joint space narrowing and small osteophytes. No acute fracture or dislocation.",
    },
];
