use super::{IqQuestion, QuestionBank};

fn question(id: u16, prompt: &str, options: [&str; 4], correct: &str) -> IqQuestion {
    IqQuestion {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct_answer: correct.to_string(),
    }
}

/// The 30-item IQ bank: sequences, analogies, odd-one-out, and short logic.
pub(super) fn build() -> QuestionBank {
    QuestionBank::Iq(vec![
        question(
            1,
            "Which number continues the sequence 2, 4, 8, 16, ...?",
            ["24", "30", "32", "36"],
            "32",
        ),
        question(
            2,
            "Which number continues the sequence 1, 1, 2, 3, 5, 8, ...?",
            ["11", "12", "13", "14"],
            "13",
        ),
        question(
            3,
            "Which word does not belong with the others?",
            ["Apple", "Banana", "Carrot", "Cherry"],
            "Carrot",
        ),
        question(
            4,
            "Book is to Reading as Fork is to ...?",
            ["Drawing", "Eating", "Writing", "Stirring"],
            "Eating",
        ),
        question(
            5,
            "Which number continues the sequence 3, 6, 9, 12, ...?",
            ["13", "14", "15", "18"],
            "15",
        ),
        question(
            6,
            "Which number continues the sequence 81, 27, 9, 3, ...?",
            ["0", "1", "2", "3"],
            "1",
        ),
        question(
            7,
            "Which shape does not belong with the others?",
            ["Square", "Triangle", "Circle", "Rectangle"],
            "Circle",
        ),
        question(
            8,
            "Day is to Night as White is to ...?",
            ["Gray", "Black", "Dark", "Light"],
            "Black",
        ),
        question(
            9,
            "Which number continues the sequence 5, 10, 20, 40, ...?",
            ["60", "70", "80", "100"],
            "80",
        ),
        question(
            10,
            "If all Bloops are Razzies and all Razzies are Lazzies, then all Bloops are ...?",
            ["Lazzies", "Razzies only", "Neither", "Cannot be determined"],
            "Lazzies",
        ),
        question(
            11,
            "Which number continues the sequence 2, 3, 5, 7, 11, ...?",
            ["12", "13", "14", "15"],
            "13",
        ),
        question(
            12,
            "Which animal does not belong with the others?",
            ["Dog", "Cat", "Sparrow", "Horse"],
            "Sparrow",
        ),
        question(
            13,
            "Glove is to Hand as Sock is to ...?",
            ["Shoe", "Foot", "Leg", "Toe"],
            "Foot",
        ),
        question(
            14,
            "Which number continues the sequence 100, 95, 85, 70, ...?",
            ["50", "55", "60", "65"],
            "50",
        ),
        question(
            15,
            "Which number is the odd one out in 3, 5, 7, 9, 11?",
            ["3", "7", "9", "11"],
            "9",
        ),
        question(
            16,
            "Which number continues the sequence 1, 4, 9, 16, 25, ...?",
            ["30", "34", "36", "49"],
            "36",
        ),
        question(
            17,
            "Pen is to Writer as Brush is to ...?",
            ["Canvas", "Painter", "Color", "Easel"],
            "Painter",
        ),
        question(
            18,
            "Which number continues the sequence 7, 14, 28, 56, ...?",
            ["84", "98", "112", "120"],
            "112",
        ),
        question(
            19,
            "Which material does not belong with the others?",
            ["Copper", "Iron", "Plastic", "Zinc"],
            "Plastic",
        ),
        question(
            20,
            "If some Trinkles are green and all green things glow, then some Trinkles ...?",
            ["Glow", "Are red", "Never glow", "Cannot be determined"],
            "Glow",
        ),
        question(
            21,
            "Which number continues the sequence 0, 1, 1, 2, 4, 7, 13, ...?",
            ["20", "22", "24", "26"],
            "24",
        ),
        question(
            22,
            "Hot is to Cold as Up is to ...?",
            ["Down", "Over", "Above", "Sideways"],
            "Down",
        ),
        question(
            23,
            "Which number continues the sequence 64, 32, 16, 8, ...?",
            ["2", "4", "6", "8"],
            "4",
        ),
        question(
            24,
            "Which word does not belong with the others?",
            ["January", "July", "Tuesday", "March"],
            "Tuesday",
        ),
        question(
            25,
            "Which number continues the sequence 6, 11, 21, 41, ...?",
            ["61", "71", "81", "91"],
            "81",
        ),
        question(
            26,
            "Finger is to Hand as Leaf is to ...?",
            ["Tree", "Branch", "Root", "Flower"],
            "Branch",
        ),
        question(
            27,
            "Which number continues the sequence 2, 6, 12, 20, 30, ...?",
            ["36", "40", "42", "44"],
            "42",
        ),
        question(
            28,
            "Which letter continues the series A, C, F, J, O, ...?",
            ["T", "U", "V", "W"],
            "U",
        ),
        question(
            29,
            "Which instrument does not belong with the others?",
            ["Violin", "Cello", "Trumpet", "Guitar"],
            "Trumpet",
        ),
        question(
            30,
            "Which number continues the sequence 4, 9, 19, 39, ...?",
            ["69", "74", "79", "84"],
            "79",
        ),
    ])
}
