//! Keyword-matched canned guidance for the chat assistant.
//!
//! The rule table is walked in order and the first match wins. Specific
//! phrases sit above the broader topics they belong to so that, for
//! example, a question about the 50/30/20 rule gets the dedicated answer
//! rather than the generic budgeting one. Reordering the table changes
//! observable replies; the order is part of the advisor's contract.

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[Rule] = &[
    // Specific phrases first.
    Rule {
        keywords: &["50/30/20"],
        reply: FIFTY_THIRTY_TWENTY,
    },
    Rule {
        keywords: &["credit score"],
        reply: CREDIT_SCORE,
    },
    Rule {
        keywords: &["emergency fund"],
        reply: EMERGENCY_FUND,
    },
    Rule {
        keywords: &["grocery", "groceries"],
        reply: GROCERIES,
    },
    Rule {
        keywords: &["retire", "401k", "ira"],
        reply: RETIREMENT,
    },
    // General topics below.
    Rule {
        keywords: &["budget", "monthly", "plan"],
        reply: BUDGETING,
    },
    Rule {
        keywords: &["save", "saving", "money"],
        reply: SAVING,
    },
    Rule {
        keywords: &["invest", "investment", "stock"],
        reply: INVESTING,
    },
    Rule {
        keywords: &["debt", "loan", "credit"],
        reply: DEBT,
    },
    Rule {
        keywords: &["track", "expense", "spending"],
        reply: EXPENSE_TRACKING,
    },
];

/// Returns the canned reply for `message`, or the topic menu when nothing
/// matches. Stateless; matching is case-insensitive substring containment.
pub fn respond(message: &str) -> &'static str {
    let text = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK)
}

const BUDGETING: &str = "\
Here's a step-by-step guide to create a monthly budget:
1. Calculate your total monthly income
2. List all fixed expenses (rent, utilities, etc.)
3. Track variable expenses (groceries, entertainment)
4. Set savings goals (20% of income recommended)
5. Use the 50/30/20 rule:
   - 50% for needs
   - 30% for wants
   - 20% for savings
6. Monitor and adjust regularly";

const SAVING: &str = "\
Here are effective tips for saving money:
1. Automate your savings with direct deposits
2. Follow the 24-hour rule for big purchases
3. Use the 50/30/20 budgeting rule
4. Cut unnecessary subscriptions
5. Cook meals at home
6. Look for better deals on insurance
7. Build an emergency fund
8. Use cashback and rewards cards wisely";

const INVESTING: &str = "\
Here are basic investment strategies:
1. Start with an emergency fund
2. Maximize retirement accounts
3. Consider low-cost index funds
4. Diversify your portfolio
5. Invest for the long term
6. Research before investing
7. Consider consulting a financial advisor";

const DEBT: &str = "\
Tips for managing and reducing debt:
1. List all debts with interest rates
2. Use either snowball or avalanche method
3. Make more than minimum payments
4. Consider debt consolidation
5. Negotiate interest rates
6. Create a debt repayment plan
7. Avoid taking on new debt";

const EXPENSE_TRACKING: &str = "\
Tips for tracking expenses:
1. Use a budgeting app
2. Keep all receipts
3. Categorize your spending
4. Review expenses weekly
5. Set spending alerts
6. Use cash for discretionary spending
7. Monitor recurring charges";

const RETIREMENT: &str = "\
Retirement planning essentials:
1. Start saving early to benefit from compound interest
2. Contribute to employer-sponsored plans (401k)
3. Consider opening an IRA
4. Diversify retirement investments
5. Calculate retirement needs
6. Review and adjust plans annually
7. Consider healthcare costs
8. Plan for Social Security benefits";

const FIFTY_THIRTY_TWENTY: &str = "\
The 50/30/20 budgeting rule explained:
1. 50% of income goes to needs:
   - Housing, utilities, food
   - Transportation, insurance
   - Minimum debt payments
2. 30% goes to wants:
   - Entertainment, dining out
   - Shopping, hobbies
   - Vacations
3. 20% goes to savings:
   - Emergency fund
   - Retirement accounts
   - Debt repayment above minimums";

const CREDIT_SCORE: &str = "\
Tips to improve your credit score:
1. Pay all bills on time
2. Keep credit utilization below 30%
3. Don't close old credit accounts
4. Limit new credit applications
5. Check credit report regularly
6. Dispute any errors
7. Consider a secured credit card
8. Keep a mix of credit types";

const EMERGENCY_FUND: &str = "\
Building an emergency fund:
1. Start with a goal of $1,000
2. Work towards 3-6 months of expenses
3. Keep it in a separate savings account
4. Make automatic contributions
5. Use windfalls (tax returns, bonuses)
6. Don't touch it for non-emergencies
7. Replenish after using
8. Consider high-yield savings accounts";

const GROCERIES: &str = "\
Tips for saving on groceries:
1. Plan meals and make a list
2. Use cashback apps and coupons
3. Buy generic brands
4. Shop seasonal produce
5. Buy in bulk when practical
6. Compare unit prices
7. Shop at discount stores
8. Avoid shopping when hungry
9. Use store loyalty programs";

const FALLBACK: &str = "\
I'm here to help with your financial questions. You can ask about:
- Budgeting and the 50/30/20 rule
- Saving strategies and emergency funds
- Investment options and retirement
- Debt management and credit scores
- Expense tracking and money-saving tips

Just ask your question and I'll help you out!";
