use crate::ai::topics::TOPICS;

pub fn run() {
    for (i, topic) in TOPICS.iter().enumerate() {
        println!("{:>2}. {}", i + 1, topic);
    }
}
