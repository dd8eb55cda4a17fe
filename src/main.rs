use perceptron::dataset::{FeatureScaling, LabeledExample};
use perceptron::network::Network;
use rand::seq::SliceRandom;
use rand_distr::Uniform;

/// Class labels, indexed by the position of the 1 in a target vector.
const CLASS_NAMES: [&str; 4] = ["passenger car", "truck", "motorcycle", "SUV"];

/// Vehicle records as (year, mileage, mass, engine displacement) with a
/// one-hot target per class.
fn dataset_vehicles() -> Vec<LabeledExample<4, 4>> {
    let records = [
        // Motorcycles.
        ([2020.0, 70000.0, 0.15, 0.2], [0.0, 0.0, 1.0, 0.0]),
        ([2023.0, 40000.0, 0.2, 0.3], [0.0, 0.0, 1.0, 0.0]),
        ([2015.0, 20000.0, 0.1, 0.15], [0.0, 0.0, 1.0, 0.0]),
        ([2019.0, 60000.0, 0.18, 0.25], [0.0, 0.0, 1.0, 0.0]),
        ([2022.0, 45000.0, 0.16, 0.22], [0.0, 0.0, 1.0, 0.0]),
        // SUVs.
        ([2020.0, 50000.0, 2.5, 3.0], [0.0, 0.0, 0.0, 1.0]),
        ([2024.0, 150000.0, 4.0, 5.0], [0.0, 0.0, 0.0, 1.0]),
        ([2025.0, 130000.0, 3.8, 4.0], [0.0, 0.0, 0.0, 1.0]),
        ([2016.0, 160000.0, 4.2, 4.5], [0.0, 0.0, 0.0, 1.0]),
        ([2018.0, 180000.0, 4.8, 5.0], [0.0, 0.0, 0.0, 1.0]),
        // Passenger cars.
        ([2022.0, 80000.0, 1.8, 2.0], [1.0, 0.0, 0.0, 0.0]),
        ([2021.0, 60000.0, 2.2, 3.0], [1.0, 0.0, 0.0, 0.0]),
        ([2025.0, 50000.0, 1.8, 3.0], [1.0, 0.0, 0.0, 0.0]),
        ([2010.0, 110000.0, 1.0, 1.5], [1.0, 0.0, 0.0, 0.0]),
        ([2013.0, 140000.0, 1.2, 2.0], [1.0, 0.0, 0.0, 0.0]),
        // Trucks.
        ([2023.0, 120000.0, 3.0, 5.0], [0.0, 1.0, 0.0, 0.0]),
        ([2022.0, 70000.0, 3.5, 5.0], [0.0, 1.0, 0.0, 0.0]),
        ([2024.0, 80000.0, 3.0, 5.0], [0.0, 1.0, 0.0, 0.0]),
        ([2017.0, 180000.0, 4.5, 6.0], [0.0, 1.0, 0.0, 0.0]),
        ([2019.0, 200000.0, 5.0, 7.0], [0.0, 1.0, 0.0, 0.0]),
    ];
    records
        .into_iter()
        .map(|(inputs, targets)| LabeledExample { inputs, targets })
        .collect()
}

fn arg_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

fn main() {
    let mut rng = rand::thread_rng();
    let scaling = FeatureScaling::new([2025.0, 200000.0, 5000.0, 10.0]);
    let dataset = dataset_vehicles();

    let mut network = Network::new(4, 8, 4, &mut rng, Uniform::new(0.0, 1.0))
        .expect("layer sizes are positive");
    let learning_rate = 0.1;

    for _ in 0..10000 {
        let example = dataset.choose(&mut rng).expect("dataset is not empty");
        let inputs = scaling.apply(&example.inputs);
        network
            .train_step(&inputs, &example.targets, learning_rate)
            .expect("example dimensions match the network");
    }

    let test_input = [2010.0, 10000.0, 3.0, 10.5];
    let normalized = scaling.apply(&test_input);
    let outputs = network
        .predict(&normalized)
        .expect("input dimensions match the network");
    let predicted = CLASS_NAMES[arg_max(&outputs)];

    println!("Input: {:?}", test_input);
    println!("Normalized: {:?}", normalized);
    println!("Outputs: {:?}", outputs);
    println!("Predicted class: {}", predicted);
}
