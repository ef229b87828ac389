diesel::table! {
    investment_goals (id) {
        id -> Integer,
        name -> Text,
        months -> Text,
        total_value -> Double,
        monthly_value -> Double,
    }
}
