//! Test fixtures - sample recipe files.

#![allow(dead_code)]

/// Well-formed recipe with two ingredients.
pub const SOUP: &str = "Soup\nWater,2,cups,0,7\nSalt,1,tsp,0,6\nBoil water;Add salt\n";

/// Recipe above the default calorie threshold (450 total).
pub const PASTA: &str = "pasta\nNoodles,250,g,350,1\nCheese,50,g,100,5\nBoil;Drain;Top with cheese\n";

/// Exactly 300 calories.
pub const BORDERLINE: &str = "Borderline\nRice,1,cup,200,1\nBeans,1,cup,100,3\nCook\n";

/// Only a name and a steps line.
pub const TOO_SHORT: &str = "Toast\nToast the bread\n";

/// One good ingredient, then bad food group, bad calorie and wrong field count.
pub const PARTLY_BROKEN: &str = "Salad\n\
Lettuce,1,head,15,2\n\
Dressing,2,tbsp,90,9\n\
Croutons,1,cup,many,1\n\
Tomato,2\n\
Olive oil,1,tbsp,120,6\n\
Wash;Chop;Toss\n";
